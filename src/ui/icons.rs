// SPDX-License-Identifier: MPL-2.0
//! Text glyph icons.
//!
//! Icons are single characters rendered with the default font, so they follow
//! the theme text color without separate light and dark variants.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::{text, Text};

pub const CHECKMARK: &str = "\u{2714}";
pub const CROSS: &str = "\u{2716}";
pub const WARNING: &str = "\u{26A0}";
pub const EYE: &str = "\u{25C9}";
pub const EYE_SLASH: &str = "\u{25CE}";
pub const CAMERA: &str = "\u{1F4F7}";
pub const USER: &str = "\u{263A}";
pub const PLAY: &str = "\u{25B6}";
pub const BELL: &str = "\u{1F514}";
pub const PALETTE: &str = "\u{25D1}";
pub const LOCK: &str = "\u{1F512}";
pub const GEAR: &str = "\u{2699}";

/// Renders `glyph` at the given font size.
pub fn sized<'a>(glyph: &'a str, size: f32) -> Text<'a> {
    text(glyph).size(size)
}
