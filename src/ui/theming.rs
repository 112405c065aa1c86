// SPDX-License-Identifier: MPL-2.0
//! Theme mode and accent color handling.
//!
//! The accent color is the single user-chosen hue of the interface. Two
//! variants derive from it: a darker hover shade and a translucent glow used
//! around active elements. [`build_theme`] folds the mode and the accent into
//! the `iced::Theme` handed to the runtime.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use std::fmt;

/// Brightness shift applied to the accent to obtain its hover shade.
pub const HOVER_BRIGHTNESS_PERCENT: i32 = -20;

/// Alpha of the glow variant.
pub const GLOW_ALPHA: f32 = 0.3;

/// Accent applied when nothing (or garbage) is persisted.
pub const DEFAULT_ACCENT_HEX: &str = "#00d9ff";

/// Swatches offered in the appearance panel.
pub const ACCENT_SWATCHES: [&str; 6] = [
    "#00d9ff", "#ff6b6b", "#a855f7", "#22c55e", "#f59e0b", "#ec4899",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parses a persisted value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Feedback shown after switching to this mode.
    #[must_use]
    pub fn activation_message(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark mode activated",
            ThemeMode::Light => "Light mode activated",
        }
    }
}

/// An opaque RGB accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (case-insensitive).
    #[must_use]
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Shifts every channel by `round(2.55 * percent)`, clamped to `0..=255`.
    #[must_use]
    pub fn adjust_brightness(self, percent: i32) -> Self {
        let amount = (2.55 * f64::from(percent)).round() as i32;
        let shift = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }

    #[must_use]
    pub fn hover(self) -> Self {
        self.adjust_brightness(HOVER_BRIGHTNESS_PERCENT)
    }

    /// CSS-style glow string, e.g. `rgba(0, 217, 255, 0.3)`.
    #[must_use]
    pub fn glow_css(self) -> String {
        format!("rgba({}, {}, {}, {GLOW_ALPHA})", self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::new(0x00, 0xd9, 0xff)
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accent plus the variants derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentScheme {
    pub base: AccentColor,
    pub primary: Color,
    pub hover: Color,
    pub glow: Color,
}

impl AccentScheme {
    #[must_use]
    pub fn new(base: AccentColor) -> Self {
        Self {
            base,
            primary: base.to_color(),
            hover: base.hover().to_color(),
            glow: Color::from_rgba8(base.r, base.g, base.b, GLOW_ALPHA),
        }
    }
}

impl Default for AccentScheme {
    fn default() -> Self {
        Self::new(AccentColor::default())
    }
}

/// Builds the runtime theme for a mode with the accent as primary color.
#[must_use]
pub fn build_theme(mode: ThemeMode, accent: &AccentScheme) -> Theme {
    let mut theme_palette = match mode {
        ThemeMode::Dark => Theme::Dark.palette(),
        ThemeMode::Light => Theme::Light.palette(),
    };
    theme_palette.primary = accent.primary;
    theme_palette.success = palette::SUCCESS_500;
    theme_palette.danger = palette::DANGER_500;
    if mode.is_dark() {
        theme_palette.background = palette::GRAY_900;
    }

    Theme::custom(
        format!("{} {}", mode.as_str(), accent.base.to_hex()),
        theme_palette,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_hex() {
        let accent = AccentColor::from_hex("#FF6B6B").expect("valid hex");
        assert_eq!(accent, AccentColor::new(0xff, 0x6b, 0x6b));
        assert_eq!(accent.to_hex(), "#ff6b6b");
    }

    #[test]
    fn rejects_malformed_hex() {
        for value in [
            "", "00d9ff", "#00d9f", "#00d9ffaa", "#zzzzzz", "#00d9fé",
            "#+f+f+f", "#+0+0+0",
        ] {
            assert_eq!(AccentColor::from_hex(value), None, "{value:?}");
        }
    }

    #[test]
    fn hover_darkens_every_channel_by_51_with_clamping() {
        let samples = [
            AccentColor::new(0x00, 0xd9, 0xff),
            AccentColor::new(10, 51, 52),
            AccentColor::new(255, 255, 255),
            AccentColor::new(0, 0, 0),
        ];
        for accent in samples {
            let hover = accent.hover();
            let expected = |c: u8| (i32::from(c) - 51).clamp(0, 255) as u8;
            assert_eq!(hover.r, expected(accent.r));
            assert_eq!(hover.g, expected(accent.g));
            assert_eq!(hover.b, expected(accent.b));
        }
        assert_eq!(AccentColor::new(0x00, 0xd9, 0xff).hover().to_hex(), "#00a6cc");
    }

    #[test]
    fn positive_adjustment_clamps_at_white() {
        let lighter = AccentColor::new(250, 100, 0).adjust_brightness(20);
        assert_eq!(lighter, AccentColor::new(255, 151, 51));
    }

    #[test]
    fn glow_is_translucent_accent() {
        assert_eq!(
            AccentColor::new(0, 217, 255).glow_css(),
            "rgba(0, 217, 255, 0.3)"
        );
        let scheme = AccentScheme::new(AccentColor::default());
        assert!((scheme.glow.a - GLOW_ALPHA).abs() < f32::EPSILON);
    }

    #[test]
    fn default_accent_matches_first_swatch() {
        assert_eq!(AccentColor::default().to_hex(), DEFAULT_ACCENT_HEX);
        assert_eq!(ACCENT_SWATCHES[0], DEFAULT_ACCENT_HEX);
    }

    #[test]
    fn theme_mode_round_trips_through_store_value() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("sepia"), None);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn built_theme_uses_accent_as_primary() {
        let scheme = AccentScheme::new(AccentColor::new(0xa8, 0x55, 0xf7));
        let theme = build_theme(ThemeMode::Light, &scheme);
        assert_eq!(theme.palette().primary, scheme.primary);
    }
}
