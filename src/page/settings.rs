//! Persisted page settings.
//!
//! The browser keeps these in `localStorage`; here the store is injected so
//! each host supplies its own. `MemorySettings` is the one provided store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::lock;

/// Key holding the vim mode flag as `"true"` or `"false"`.
pub const VI_MODE_KEY: &str = "viMode";

pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Read a boolean flag. Anything but `"true"` counts as off.
pub fn read_flag(store: &dyn SettingsStore, key: &str) -> bool {
    store.get(key).as_deref() == Some("true")
}

#[derive(Debug, Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        lock(&self.values).insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_flag() {
        let store = MemorySettings::new();
        assert!(!read_flag(&store, VI_MODE_KEY));
        store.set(VI_MODE_KEY, "true");
        assert!(read_flag(&store, VI_MODE_KEY));
        store.set(VI_MODE_KEY, "false");
        assert!(!read_flag(&store, VI_MODE_KEY));
        store.set(VI_MODE_KEY, "TRUE");
        assert!(!read_flag(&store, VI_MODE_KEY));
    }
}
