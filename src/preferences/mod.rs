// SPDX-License-Identifier: MPL-2.0
//! Persisted user preferences.
//!
//! Preferences are plain string values keyed by identifier. Components never
//! reach for a global store; they receive a [`PreferenceStore`] and read or
//! write the keys they own.
//!
//! # Implementations
//!
//! - [`LocalStore`] - CBOR file in the application data directory
//! - [`MemoryStore`] - in-process map, used by tests and as a fallback

mod local_store;
mod memory;

pub use local_store::LocalStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Well-known preference keys.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const ACCENT_COLOR: &str = "accentColor";
    pub const SUBTITLE_SIZE: &str = "subtitleSize";
    pub const VIDEO_QUALITY: &str = "videoQuality";
    pub const SUBTITLE_LANG: &str = "subtitleLang";
}

/// String-keyed, string-valued synchronous preference storage.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Writes a value and logs instead of failing; a lost write must never
/// interrupt the UI.
pub fn persist(store: &mut dyn PreferenceStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        log::warn!("Failed to persist preference '{key}': {err}");
    }
}

/// Reads a boolean stored as `"true"`/`"false"`.
///
/// Any other stored value reads as `false`, matching how the value was
/// compared when written by older builds.
#[must_use]
pub fn get_bool(store: &dyn PreferenceStore, key: &str) -> Option<bool> {
    store.get(key).map(|value| value == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_bool_reads_true_literal_only() {
        let mut store = MemoryStore::new();
        store.set("a", "true").unwrap();
        store.set("b", "false").unwrap();
        store.set("c", "yes").unwrap();

        assert_eq!(get_bool(&store, "a"), Some(true));
        assert_eq!(get_bool(&store, "b"), Some(false));
        assert_eq!(get_bool(&store, "c"), Some(false));
        assert_eq!(get_bool(&store, "missing"), None);
    }

    #[test]
    fn persist_overwrites_previous_value() {
        let mut store = MemoryStore::new();
        persist(&mut store, keys::THEME, "dark");
        persist(&mut store, keys::THEME, "light");
        assert_eq!(store.get(keys::THEME).as_deref(), Some("light"));
    }
}
