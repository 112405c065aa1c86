// SPDX-License-Identifier: MPL-2.0
//! File-backed preference store using CBOR format.
//!
//! The whole key/value map is rewritten on every `set`. Each write goes to a
//! `.tmp` sibling that is renamed over the store once fully flushed, so a
//! failed write leaves the previous file intact.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()` with an explicit directory
//! 2. Set `ICED_PREFS_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::PreferenceStore;
use crate::app::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
const STORE_FILE: &str = "preferences.cbor";

/// Preference store persisted to a CBOR file.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    values: BTreeMap<String, String>,
    /// Backing file; `None` keeps the store in memory only.
    path: Option<PathBuf>,
}

impl LocalStore {
    /// Loads the store from the default location.
    ///
    /// Returns a tuple of (store, optional_warning). If loading fails, the
    /// store starts empty and the warning explains what went wrong.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the store from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STORE_FILE);
            dir
        }) else {
            return (
                Self::default(),
                Some("Preferences cannot be saved on this system".to_string()),
            );
        };

        if !path.exists() {
            return (Self::empty_at(path), None);
        }

        match read_map(&path) {
            Ok(values) => (
                Self {
                    values,
                    path: Some(path),
                },
                None,
            ),
            Err(err) => {
                log::warn!("Failed to read preferences from {}: {err}", path.display());
                (
                    Self::empty_at(path),
                    Some("Saved preferences could not be read".to_string()),
                )
            }
        }
    }

    fn empty_at(path: PathBuf) -> Self {
        Self {
            values: BTreeMap::new(),
            path: Some(path),
        }
    }

    /// Path of the backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("cbor.tmp");
        if let Err(err) = write_map(&temp_path, &self.values) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

fn write_map(path: &Path, values: &BTreeMap<String, String>) -> Result<()> {
    let mut writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(values, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn read_map(path: &Path) -> Result<BTreeMap<String, String>> {
    let reader = BufReader::new(fs::File::open(path)?);
    let values = ciborium::from_reader(reader)?;
    Ok(values)
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::Store("preference key must not be empty".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_empty_store_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = LocalStore::load_from(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn set_writes_through_to_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().join("nested"));

        let (mut store, _) = LocalStore::load_from(base.clone());
        store.set("theme", "light").expect("set should succeed");
        store.set("accentColor", "#ff6b6b").expect("set should succeed");

        let (reloaded, warning) = LocalStore::load_from(base);
        assert!(warning.is_none());
        assert_eq!(reloaded.get("theme").as_deref(), Some("light"));
        assert_eq!(reloaded.get("accentColor").as_deref(), Some("#ff6b6b"));
    }

    #[test]
    fn corrupted_file_yields_warning_and_empty_store() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(STORE_FILE), b"not cbor at all").unwrap();

        let (store, warning) = LocalStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_some());
        assert_eq!(store.get("theme"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_is_reported_and_keeps_previous_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let (mut store, _) = LocalStore::load_from(base.clone());
        store.set("theme", "light").expect("first write should succeed");

        // Every write to /dev/full fails with ENOSPC once flushed.
        let temp_path = temp_dir.path().join("preferences.cbor.tmp");
        std::os::unix::fs::symlink("/dev/full", &temp_path).expect("create symlink");

        assert!(matches!(store.set("theme", "dark"), Err(Error::Io(_))));

        let (reloaded, warning) = LocalStore::load_from(base);
        assert!(warning.is_none());
        assert_eq!(reloaded.get("theme").as_deref(), Some("light"));
    }

    #[test]
    fn no_temp_file_left_after_write() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut store, _) = LocalStore::load_from(Some(temp_dir.path().to_path_buf()));
        store.set("theme", "light").expect("set should succeed");

        assert!(temp_dir.path().join(STORE_FILE).exists());
        assert!(!temp_dir.path().join("preferences.cbor.tmp").exists());
    }

    #[test]
    fn empty_key_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (mut store, _) = LocalStore::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(matches!(store.set("", "x"), Err(Error::Store(_))));
    }
}
