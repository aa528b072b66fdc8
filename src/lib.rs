//! AI Launchpad - popup launcher for a curated catalog of AI tools
//!
//! Provides the tool catalog, persisted settings with dual-backend
//! storage, the ordering/grouping engine, and the launch dispatcher.

pub mod catalog;
pub mod launcher;
pub mod ordering;
pub mod settings;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use catalog::{all_tools, tool_by_id, ToolCategory, ToolRecord};
pub use launcher::{LaunchDispatcher, SystemOpener, UrlOpener, POPUP_HEIGHT, POPUP_WIDTH};
pub use ordering::{group_by_category, reconcile_order, reorder};
pub use settings::Settings;
pub use store::{
    ConfigDirBackend, DirBackend, LocalDirBackend, MemoryBackend, SettingsBackend, SettingsStore,
    StoreError, STORAGE_KEY,
};
pub use theme::{accent_or_default, accent_palette, parse_hex, AccentColor, Theme, DEFAULT_ACCENT};
