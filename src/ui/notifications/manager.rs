// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the single feedback slot of the screen. A new
//! notification replaces the visible one and restarts the auto-dismiss timer.

use super::notification::{Notification, Severity};
use super::Notifier;
use crate::app::config::DEFAULT_TOAST_DURATION_MS;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Hide the visible notification immediately.
    Dismiss,
}

/// Manages the currently visible notification.
#[derive(Debug)]
pub struct Manager {
    current: Option<Notification>,
    /// How long a notification stays visible.
    duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

impl Manager {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Shows `message`, replacing whatever is visible, with the timer
    /// starting at `now`.
    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let notification = Notification::new(severity, message, now);
        log::debug!(
            "toast ({:?}): {}",
            notification.severity(),
            notification.message()
        );
        self.current = Some(notification);
    }

    /// Hides the notification once its display window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|n| n.is_expired(now, self.duration))
        {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss => self.dismiss(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

impl Notifier for Manager {
    fn notify(&mut self, message: String, severity: Severity) {
        self.notify_at(message, severity, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> Manager {
        Manager::new(Duration::from_millis(3000))
    }

    #[test]
    fn new_manager_is_empty() {
        assert!(!manager().is_visible());
    }

    #[test]
    fn notify_shows_message_with_severity() {
        let mut manager = manager();
        manager.notify("Accent color updated".into(), Severity::Success);

        let current = manager.current().expect("notification visible");
        assert_eq!(current.message(), "Accent color updated");
        assert_eq!(current.severity(), Severity::Success);
    }

    #[test]
    fn hides_after_duration() {
        let mut manager = manager();
        let start = Instant::now();
        manager.notify_at("Saved", Severity::Success, start);

        manager.tick(start + Duration::from_millis(2999));
        assert!(manager.is_visible());

        manager.tick(start + Duration::from_millis(3000));
        assert!(!manager.is_visible());
    }

    #[test]
    fn second_notification_replaces_first_and_restarts_timer() {
        let mut manager = manager();
        let start = Instant::now();
        manager.notify_at("First", Severity::Success, start);
        let second_at = start + Duration::from_millis(2000);
        manager.notify_at("Second", Severity::Warning, second_at);

        // The first call's window has passed; the second one keeps the toast up.
        manager.tick(start + Duration::from_millis(3500));
        let current = manager.current().expect("second notification visible");
        assert_eq!(current.message(), "Second");
        assert_eq!(current.severity(), Severity::Warning);

        manager.tick(second_at + Duration::from_millis(3000));
        assert!(!manager.is_visible());
    }

    #[test]
    fn dismiss_hides_immediately() {
        let mut manager = manager();
        manager.notify("Oops".into(), Severity::Error);
        manager.handle_message(&Message::Dismiss);
        assert!(!manager.is_visible());
    }
}
