// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_PREFS_DATA_DIR`, `ICED_PREFS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedPrefs";

/// Environment variable to override the data directory (preference store).
pub const ENV_DATA_DIR: &str = "ICED_PREFS_DATA_DIR";

/// Environment variable to override the config directory (settings.toml).
pub const ENV_CONFIG_DIR: &str = "ICED_PREFS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err()
        || CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI path overrides were already initialized; ignoring");
    }
}

fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Resolves a directory following the documented priority order.
fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env_var: &str,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding the persisted preference store, preferring
/// `override_path` when given.
///
/// Returns `None` if the platform data directory cannot be determined.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        get_cli_data_dir(),
        ENV_DATA_DIR,
        dirs::data_dir(),
    )
}

/// Returns the directory holding `settings.toml`, preferring `override_path`
/// when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        get_cli_config_dir(),
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is shared between test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const UNSET_VAR: &str = "ICED_PREFS_TEST_UNSET_DIR";

    #[test]
    fn explicit_override_wins_over_everything() {
        let resolved = resolve(
            Some(PathBuf::from("/override")),
            Some(PathBuf::from("/from-cli")),
            UNSET_VAR,
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/override")));
    }

    #[test]
    fn cli_value_beats_platform_default() {
        let resolved = resolve(
            None,
            Some(PathBuf::from("/from-cli")),
            UNSET_VAR,
            Some(PathBuf::from("/platform")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/from-cli")));
    }

    #[test]
    fn platform_default_gets_app_subdirectory() {
        let resolved = resolve(None, None, UNSET_VAR, Some(PathBuf::from("/platform")));
        assert_eq!(resolved, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn no_platform_directory_yields_none() {
        assert_eq!(resolve(None, None, UNSET_VAR, None), None);
    }

    #[test]
    fn environment_variable_applies_when_not_empty() {
        let _guard = ENV_LOCK.lock().expect("env lock poisoned");
        let var = "ICED_PREFS_TEST_DATA_DIR";

        std::env::set_var(var, "/from-env");
        let from_env = resolve(None, None, var, Some(PathBuf::from("/platform")));

        std::env::set_var(var, "");
        let empty = resolve(None, None, var, Some(PathBuf::from("/platform")));
        std::env::remove_var(var);

        assert_eq!(from_env, Some(PathBuf::from("/from-env")));
        assert_eq!(empty, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn public_override_helpers_return_override() {
        let data = PathBuf::from("/custom/data");
        let config = PathBuf::from("/custom/config");
        assert_eq!(get_app_data_dir_with_override(Some(data.clone())), Some(data));
        assert_eq!(
            get_app_config_dir_with_override(Some(config.clone())),
            Some(config)
        );
    }
}
