//! Static catalog of launchable AI tools
//!
//! The catalog is fixed at build time. Records are never created or
//! mutated at runtime; everything else in the app derives its view from
//! this table plus the persisted settings.

use std::fmt;

/// Category buckets for the tool list
///
/// The variant order here is the fixed display order of the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    WritingSearch,
    ImageGeneration,
    VideoEditing,
    Productivity,
    General,
}

impl ToolCategory {
    /// All categories in display order
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::WritingSearch,
        ToolCategory::ImageGeneration,
        ToolCategory::VideoEditing,
        ToolCategory::Productivity,
        ToolCategory::General,
    ];

    /// Human-readable group label, also the key under which the
    /// collapsed state is persisted
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::WritingSearch => "Writing & Search",
            ToolCategory::ImageGeneration => "Image Generation",
            ToolCategory::VideoEditing => "Video Editing",
            ToolCategory::Productivity => "Productivity",
            ToolCategory::General => "General",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One launchable tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRecord {
    /// Unique id, used as the key in the persisted settings
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    /// Optional icon reference (unused by the monogram renderer, kept for
    /// catalog completeness)
    pub icon: Option<&'static str>,
}

const TOOLS: &[ToolRecord] = &[
    ToolRecord {
        id: "chatgpt",
        name: "ChatGPT",
        url: "https://chatgpt.com",
        description: "OpenAI Chatbot",
        category: ToolCategory::WritingSearch,
        icon: Some("https://www.google.com/s2/favicons?domain=chatgpt.com&sz=64"),
    },
    ToolRecord {
        id: "claude",
        name: "Claude",
        url: "https://claude.ai",
        description: "Anthropic AI",
        category: ToolCategory::WritingSearch,
        icon: Some("https://www.google.com/s2/favicons?domain=claude.ai&sz=64"),
    },
    ToolRecord {
        id: "gemini",
        name: "Gemini",
        url: "https://gemini.google.com",
        description: "Google AI",
        category: ToolCategory::WritingSearch,
        icon: Some("https://www.google.com/s2/favicons?domain=gemini.google.com&sz=64"),
    },
    ToolRecord {
        id: "perplexity",
        name: "Perplexity",
        url: "https://perplexity.ai",
        description: "Search & Answer Engine",
        category: ToolCategory::WritingSearch,
        icon: Some("https://www.google.com/s2/favicons?domain=perplexity.ai&sz=64"),
    },
    ToolRecord {
        id: "grok",
        name: "Grok",
        url: "https://grok.com",
        description: "xAI Platform",
        category: ToolCategory::WritingSearch,
        icon: Some("https://www.google.com/s2/favicons?domain=grok.com&sz=64"),
    },
    ToolRecord {
        id: "deepseek",
        name: "DeepSeek",
        url: "https://chat.deepseek.com",
        description: "LLM Platform",
        category: ToolCategory::WritingSearch,
        icon: Some("https://www.google.com/s2/favicons?domain=deepseek.com&sz=64"),
    },
    ToolRecord {
        id: "midjourney",
        name: "Midjourney",
        url: "https://www.midjourney.com",
        description: "AI Image Generation",
        category: ToolCategory::ImageGeneration,
        icon: Some("https://www.google.com/s2/favicons?domain=midjourney.com&sz=64"),
    },
    ToolRecord {
        id: "runway",
        name: "Runway",
        url: "https://runwayml.com",
        description: "AI Video Editing",
        category: ToolCategory::VideoEditing,
        icon: Some("https://www.google.com/s2/favicons?domain=runwayml.com&sz=64"),
    },
    ToolRecord {
        id: "notion",
        name: "Notion AI",
        url: "https://notion.ai",
        description: "Smart Workspace",
        category: ToolCategory::Productivity,
        icon: Some("https://www.google.com/s2/favicons?domain=notion.ai&sz=64"),
    },
    ToolRecord {
        id: "fireflies",
        name: "Fireflies",
        url: "https://fireflies.ai",
        description: "AI Meeting Assistant",
        category: ToolCategory::Productivity,
        icon: Some("https://www.google.com/s2/favicons?domain=fireflies.ai&sz=64"),
    },
];

/// The full catalog in declaration order
pub fn all_tools() -> &'static [ToolRecord] {
    TOOLS
}

/// Look up a single record by id
pub fn tool_by_id(id: &str) -> Option<&'static ToolRecord> {
    TOOLS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let tools = all_tools();
        for (i, a) in tools.iter().enumerate() {
            for b in &tools[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id {}", a.id);
            }
        }
    }

    #[test]
    fn test_tool_by_id() {
        let tool = tool_by_id("chatgpt").expect("chatgpt in catalog");
        assert_eq!(tool.name, "ChatGPT");
        assert_eq!(tool.category, ToolCategory::WritingSearch);
        assert!(tool_by_id("not-a-tool").is_none());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ToolCategory::WritingSearch.label(), "Writing & Search");
        assert_eq!(ToolCategory::ALL.len(), 5);
    }
}
