// SPDX-License-Identifier: MPL-2.0
//! Application configuration stored in `settings.toml`.
//!
//! This file tunes the behavior of the settings screen itself (timings and
//! limits). User preferences chosen inside the screen live in the preference
//! store instead, see [`crate::preferences`].
//!
//! # Configuration Sections
//!
//! - `[feedback]` - Toast display duration
//! - `[profile]` - Profile image size limit and preview fade
//! - `[actions]` - Simulated operation delays
//! - `[layout]` - Narrow viewport threshold
//!
//! # Examples
//!
//! ```no_run
//! use iced_prefs::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.feedback.toast_duration_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Feedback surface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackConfig {
    /// Toast visibility duration in milliseconds.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub toast_duration_ms: Option<u64>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Profile image settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileConfig {
    /// Maximum accepted image size in bytes.
    #[serde(
        default = "default_max_image_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_image_bytes: Option<u64>,

    /// Fade-in duration of a freshly decoded preview, in milliseconds.
    #[serde(default = "default_fade_in_ms", skip_serializing_if = "Option::is_none")]
    pub fade_in_ms: Option<u64>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
            fade_in_ms: default_fade_in_ms(),
        }
    }
}

/// Delays of the simulated account operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsConfig {
    #[serde(
        default = "default_confirm_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub confirm_delay_ms: Option<u64>,

    #[serde(default = "default_save_delay_ms", skip_serializing_if = "Option::is_none")]
    pub save_delay_ms: Option<u64>,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay_ms(),
            save_delay_ms: default_save_delay_ms(),
        }
    }
}

/// Layout thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Window width (logical pixels) treated as a narrow viewport.
    #[serde(
        default = "default_narrow_viewport_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub narrow_viewport_width: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_viewport_width: default_narrow_viewport_width(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub actions: ActionsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Toast duration, clamped to the supported range.
    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        let ms = self
            .feedback
            .toast_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn max_image_bytes(&self) -> u64 {
        self.profile
            .max_image_bytes
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }

    #[must_use]
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.profile.fade_in_ms.unwrap_or(DEFAULT_FADE_IN_MS))
    }

    #[must_use]
    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(
            self.actions
                .confirm_delay_ms
                .unwrap_or(DEFAULT_CONFIRM_DELAY_MS),
        )
    }

    #[must_use]
    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.actions.save_delay_ms.unwrap_or(DEFAULT_SAVE_DELAY_MS))
    }

    #[must_use]
    pub fn narrow_viewport_width(&self) -> f32 {
        self.layout
            .narrow_viewport_width
            .unwrap_or(DEFAULT_NARROW_VIEWPORT_WIDTH)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_max_image_bytes() -> Option<u64> {
    Some(DEFAULT_MAX_IMAGE_BYTES)
}

fn default_fade_in_ms() -> Option<u64> {
    Some(DEFAULT_FADE_IN_MS)
}

fn default_confirm_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONFIRM_DELAY_MS)
}

fn default_save_delay_ms() -> Option<u64> {
    Some(DEFAULT_SAVE_DELAY_MS)
}

fn default_narrow_viewport_width() -> Option<f32> {
    Some(DEFAULT_NARROW_VIEWPORT_WIDTH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a user-facing warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("Settings file is invalid, defaults are in use".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("config directory unavailable".to_string()))?;
    save_to_path(config, &path)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
