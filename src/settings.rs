//! Persisted user settings and their transitions
//!
//! `Settings` is the single mutable record the app owns. Every user
//! action mutates it in memory and then persists the whole object; there
//! are no partial patches. Field names serialize in camelCase so records
//! written by earlier releases keep loading unchanged, and every field
//! defaults independently so old or foreign records degrade gracefully.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{all_tools, ToolCategory};
use crate::ordering::{reconcile_order, reorder};
use crate::theme::DEFAULT_ACCENT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Sparse per-tool enable map; a missing id means disabled
    pub enabled_tools: HashMap<String, bool>,
    /// Linear order of tool ids, reconciled against the catalog on load
    pub tool_order: Vec<String>,
    /// Master switch gating per-tool toggles and launches
    pub is_extension_enabled: bool,
    /// Collapsed state per category label
    pub collapsed_categories: HashMap<String, bool>,
    /// Accent color as a hex string, e.g. "#ccff00"
    pub accent_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_tools: HashMap::new(),
            tool_order: all_tools().iter().map(|t| t.id.to_string()).collect(),
            is_extension_enabled: true,
            collapsed_categories: HashMap::new(),
            accent_color: DEFAULT_ACCENT.to_string(),
        }
    }
}

impl Settings {
    /// Whether a tool is enabled; lookup miss means disabled
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled_tools.get(id).copied().unwrap_or(false)
    }

    /// Whether a category group is collapsed
    pub fn is_collapsed(&self, category: ToolCategory) -> bool {
        self.collapsed_categories
            .get(category.label())
            .copied()
            .unwrap_or(false)
    }

    /// Align `tool_order` with the current catalog. Called once after
    /// load; afterwards the order stays a permutation of the catalog ids.
    pub fn reconcile(&mut self) {
        self.tool_order = reconcile_order(all_tools(), &self.tool_order);
    }

    /// Flip one tool. Inert while the master switch is off.
    /// Returns whether the transition applied.
    pub fn toggle_tool(&mut self, id: &str) -> bool {
        if !self.is_extension_enabled {
            return false;
        }
        let entry = self.enabled_tools.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        true
    }

    /// Flip the master switch. Always valid.
    pub fn toggle_master(&mut self) {
        self.is_extension_enabled = !self.is_extension_enabled;
    }

    /// Flip a category's collapsed state. Valid regardless of the master
    /// switch.
    pub fn toggle_category(&mut self, category: ToolCategory) {
        let entry = self
            .collapsed_categories
            .entry(category.label().to_string())
            .or_insert(false);
        *entry = !*entry;
    }

    /// Replace the accent color unconditionally. The dialog only offers
    /// the fixed palette, but the record accepts any string; rendering
    /// falls back to the default on values it cannot parse.
    pub fn set_accent_color(&mut self, color: &str) {
        self.accent_color = color.to_string();
    }

    /// Apply a drag move to the order. Inert while the master switch is
    /// off; invalid ids are a silent no-op.
    pub fn apply_reorder(&mut self, source: &str, target: &str) -> bool {
        if !self.is_extension_enabled {
            return false;
        }
        let next = reorder(&self.tool_order, source, target);
        let changed = next != self.tool_order;
        self.tool_order = next;
        changed
    }

    /// Enable every catalog tool. Inert while the master switch is off.
    pub fn select_all(&mut self) -> bool {
        if !self.is_extension_enabled {
            return false;
        }
        for tool in all_tools() {
            self.enabled_tools.insert(tool.id.to_string(), true);
        }
        true
    }

    /// Disable everything by clearing the map. Inert while the master
    /// switch is off.
    pub fn clear_all(&mut self) -> bool {
        if !self.is_extension_enabled {
            return false;
        }
        self.enabled_tools.clear();
        true
    }

    /// Ids of currently enabled tools in catalog declaration order
    pub fn enabled_ids(&self) -> Vec<&'static str> {
        all_tools()
            .iter()
            .filter(|t| self.is_enabled(t.id))
            .map(|t| t.id)
            .collect()
    }
}
