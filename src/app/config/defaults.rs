// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// How long a toast stays visible before hiding itself (milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Shortest toast duration accepted from the config file.
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Longest toast duration accepted from the config file.
pub const MAX_TOAST_DURATION_MS: u64 = 30_000;

// ==========================================================================
// Profile Image Defaults
// ==========================================================================

/// Largest accepted profile image (5 MiB).
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Duration of the preview fade-in after a new image is decoded.
pub const DEFAULT_FADE_IN_MS: u64 = 300;

// ==========================================================================
// Simulated Operation Defaults
// ==========================================================================

/// Delay of confirmed destructive actions (clear history, logout, delete).
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 1000;

/// Delay of the save operation.
pub const DEFAULT_SAVE_DELAY_MS: u64 = 1500;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width at or below which navigation scrolls the panel to the top.
pub const DEFAULT_NARROW_VIEWPORT_WIDTH: f32 = 768.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_duration_is_within_bounds() {
        assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
        assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    }

    #[test]
    fn save_takes_longer_than_confirmed_actions() {
        assert!(DEFAULT_SAVE_DELAY_MS > DEFAULT_CONFIRM_DELAY_MS);
    }
}
