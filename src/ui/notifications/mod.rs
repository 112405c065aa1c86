// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single transient message acknowledges user actions without blocking
//! interaction. Components report feedback through the [`Notifier`] trait and
//! never hold the manager directly.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` owning the visible toast and its timer
//! - [`toast`] - Toast widget component for rendering the notification
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notifier, Severity};
//!
//! let mut manager = Manager::default();
//! manager.notify("Accent color updated".into(), Severity::Success);
//!
//! // In your view function
//! let toast_overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;

/// Sink for user-facing feedback messages.
pub trait Notifier {
    /// Shows `message` with the given severity, replacing any visible one.
    fn notify(&mut self, message: String, severity: Severity);

    fn success(&mut self, message: &str) {
        self.notify(message.to_string(), Severity::Success);
    }

    fn warning(&mut self, message: &str) {
        self.notify(message.to_string(), Severity::Warning);
    }

    fn error(&mut self, message: &str) {
        self.notify(message.to_string(), Severity::Error);
    }
}

/// Notifier that records every message, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, Severity)>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn last(&self) -> Option<(&str, Severity)> {
        self.messages.last().map(|(m, s)| (m.as_str(), *s))
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: String, severity: Severity) {
        self.messages.push((message, severity));
    }
}
