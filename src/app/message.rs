// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::settings;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss and the avatar fade-in.
    Tick(Instant),
    WindowResized(Size),
    /// Ctrl/Cmd+S.
    SaveShortcut,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional data directory override (for the preference store).
    /// Takes precedence over `ICED_PREFS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PREFS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
