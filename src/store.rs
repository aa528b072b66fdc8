//! Settings persistence
//!
//! The settings record lives under one fixed key in a string key-value
//! backend. Two interchangeable backends exist: the platform config
//! directory (primary) and an always-available local fallback. Which one
//! handles a call is decided by a capability probe at every load/save --
//! there is no cached flag, so a host that gains or loses its config
//! directory mid-session is tolerated. Backends are injected so the store
//! tests run against temp directories and an in-memory map instead of the
//! real home directory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::settings::Settings;

/// Fixed key the settings record is stored under. The value is the
/// record shape of earlier releases; keeping it means existing installs
/// pick up their preferences unchanged.
pub const STORAGE_KEY: &str = "ai_hub_pro_settings_v3";

/// Directory name used inside whichever backend root is selected
const APP_DIR: &str = "ai-launchpad";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend unavailable")]
    Unavailable,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string key-value backend for the settings record
pub trait SettingsBackend {
    /// Capability probe, evaluated on every store call
    fn available(&self) -> bool;
    /// Read the raw value under `key`; `None` when absent or unreadable
    fn read(&self, key: &str) -> Option<String>;
    /// Write the raw value under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

fn read_key_at(root: Option<PathBuf>, key: &str) -> Option<String> {
    let path = root?.join(APP_DIR).join(format!("{key}.json"));
    std::fs::read_to_string(path).ok()
}

fn write_key_at(root: Option<PathBuf>, key: &str, value: &str) -> Result<(), StoreError> {
    let dir = root.ok_or(StoreError::Unavailable)?.join(APP_DIR);
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join(format!("{key}.json")), value)?;
    Ok(())
}

/// Primary backend: the platform config directory
pub struct ConfigDirBackend;

impl SettingsBackend for ConfigDirBackend {
    fn available(&self) -> bool {
        dirs::config_dir().is_some()
    }

    fn read(&self, key: &str) -> Option<String> {
        read_key_at(dirs::config_dir(), key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        write_key_at(dirs::config_dir(), key, value)
    }
}

/// Fallback backend: a directory under the system temp root, reachable
/// even when no per-user config directory exists
pub struct LocalDirBackend;

impl SettingsBackend for LocalDirBackend {
    fn available(&self) -> bool {
        true
    }

    fn read(&self, key: &str) -> Option<String> {
        read_key_at(Some(std::env::temp_dir()), key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        write_key_at(Some(std::env::temp_dir()), key, value)
    }
}

/// File backend rooted at an explicit directory; used by tests and
/// available for portable installs
pub struct DirBackend {
    root: PathBuf,
}

impl DirBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SettingsBackend for DirBackend {
    fn available(&self) -> bool {
        true
    }

    fn read(&self, key: &str) -> Option<String> {
        read_key_at(Some(self.root.clone()), key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        write_key_at(Some(self.root.clone()), key, value)
    }
}

/// In-memory backend for tests
#[derive(Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
    unavailable: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose capability probe always fails
    pub fn unavailable() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            unavailable: true,
        }
    }
}

impl SettingsBackend for MemoryBackend {
    fn available(&self) -> bool {
        !self.unavailable
    }

    fn read(&self, key: &str) -> Option<String> {
        if self.unavailable {
            return None;
        }
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }
        let mut values = self.values.lock().map_err(|_| StoreError::Unavailable)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the settings record through whichever backend the
/// per-call probe selects
pub struct SettingsStore {
    primary: Box<dyn SettingsBackend>,
    fallback: Box<dyn SettingsBackend>,
}

impl SettingsStore {
    /// Store over the platform backends
    pub fn new() -> Self {
        Self::with_backends(Box::new(ConfigDirBackend), Box::new(LocalDirBackend))
    }

    /// Store over injected backends
    pub fn with_backends(
        primary: Box<dyn SettingsBackend>,
        fallback: Box<dyn SettingsBackend>,
    ) -> Self {
        Self { primary, fallback }
    }

    fn backend(&self) -> &dyn SettingsBackend {
        if self.primary.available() {
            self.primary.as_ref()
        } else {
            self.fallback.as_ref()
        }
    }

    /// Read the persisted settings. Absent record and unparseable record
    /// both yield `None`; the caller falls back to defaults either way.
    pub fn load(&self) -> Option<Settings> {
        let raw = self.backend().read(STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("discarding unparseable settings record: {e}");
                None
            }
        }
    }

    /// Persist the full settings object. Fire and forget: a failure is
    /// logged and the in-memory state stays authoritative.
    pub fn save(&self, settings: &Settings) {
        let raw = match serde_json::to_string(settings) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize settings: {e}");
                return;
            }
        };
        if let Err(e) = self.backend().write(STORAGE_KEY, &raw) {
            log::warn!("failed to persist settings: {e}");
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> SettingsStore {
        SettingsStore::with_backends(Box::new(MemoryBackend::new()), Box::new(MemoryBackend::new()))
    }

    #[test]
    fn test_load_absent_record() {
        assert!(memory_store().load().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = memory_store();
        let mut settings = Settings::default();
        settings.toggle_tool("claude");
        settings.toggle_tool("runway");
        settings.set_accent_color("#ff007a");
        settings.apply_reorder("gemini", "chatgpt");

        store.save(&settings);
        let mut loaded = store.load().expect("record present after save");
        loaded.reconcile();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_each_toggle_persists_the_flipped_value() {
        let store = memory_store();
        let mut settings = Settings::default();

        settings.toggle_tool("chatgpt");
        store.save(&settings);
        assert!(store.load().unwrap().is_enabled("chatgpt"));

        settings.toggle_tool("chatgpt");
        store.save(&settings);
        assert!(!store.load().unwrap().is_enabled("chatgpt"));
    }

    #[test]
    fn test_parse_failure_is_absent_not_error() {
        let backend = MemoryBackend::new();
        backend.write(STORAGE_KEY, "{not json").unwrap();
        let store =
            SettingsStore::with_backends(Box::new(backend), Box::new(MemoryBackend::new()));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_fallback_used_when_primary_unavailable() {
        let fallback = MemoryBackend::new();
        fallback
            .write(STORAGE_KEY, &serde_json::to_string(&Settings::default()).unwrap())
            .unwrap();
        let store =
            SettingsStore::with_backends(Box::new(MemoryBackend::unavailable()), Box::new(fallback));

        assert!(store.load().is_some());

        let mut settings = Settings::default();
        settings.toggle_master();
        store.save(&settings);
        let loaded = store.load().unwrap();
        assert!(!loaded.is_extension_enabled);
    }

    #[test]
    fn test_write_failure_does_not_panic() {
        let store = SettingsStore::with_backends(
            Box::new(MemoryBackend::unavailable()),
            Box::new(MemoryBackend::unavailable()),
        );
        // Both backends refuse the write; save logs and returns.
        store.save(&Settings::default());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_dir_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::with_backends(
            Box::new(DirBackend::new(dir.path())),
            Box::new(MemoryBackend::new()),
        );

        assert!(store.load().is_none());
        let mut settings = Settings::default();
        settings.select_all();
        store.save(&settings);

        let loaded = store.load().expect("record on disk");
        assert_eq!(loaded.enabled_tools.len(), crate::catalog::all_tools().len());

        // The record lands under the fixed key.
        let path = dir
            .path()
            .join(APP_DIR)
            .join(format!("{STORAGE_KEY}.json"));
        assert!(path.exists());
    }
}
