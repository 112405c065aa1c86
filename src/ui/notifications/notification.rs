// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::Color;
use std::time::{Duration, Instant};

/// Severity level determines the toast glyph and background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Something failed (red).
    Error,
    /// Completed with a caveat or was cancelled (orange).
    Warning,
}

impl Severity {
    /// Returns the background color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::DANGER_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => icons::CHECKMARK,
            Severity::Error => icons::CROSS,
            Severity::Warning => icons::WARNING,
        }
    }
}

/// A notification displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    message: String,
    severity: Severity,
    shown_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            severity,
            shown_at,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns true once `duration` has elapsed since the notification was shown.
    #[must_use]
    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_defaults_to_success() {
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn each_severity_has_distinct_color_and_glyph() {
        let all = [Severity::Success, Severity::Error, Severity::Warning];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.color(), b.color());
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn expires_exactly_at_duration() {
        let start = Instant::now();
        let notification = Notification::new(Severity::Success, "Saved", start);
        let duration = Duration::from_millis(3000);

        assert!(!notification.is_expired(start + Duration::from_millis(2999), duration));
        assert!(notification.is_expired(start + duration, duration));
    }
}
