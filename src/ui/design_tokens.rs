// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the settings screen.
//!
//! Components read colors, spacing and sizes from here instead of inlining
//! numbers, so the panels, toasts and dialogs stay consistent. The accent
//! color is not a token: it is user-selected at runtime, see
//! [`crate::ui::theming`].
//!
//! ```
//! use iced_prefs::ui::design_tokens::{opacity, palette, spacing};
//!
//! let backdrop = iced::Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(spacing::MD > spacing::XS);
//! # let _ = backdrop;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Dark mode page background.
    pub const GRAY_900: Color = Color::from_rgb(0.06, 0.07, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Secondary text and idle input borders.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Toast backgrounds and validation cues
    pub const DANGER_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal backdrop.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
    /// Panel cards, slightly see-through over the page background.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing in logical pixels, on a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Profile picture diameter.
    pub const AVATAR: f32 = 96.0;
    /// Accent swatch diameter.
    pub const SWATCH: f32 = 32.0;

    pub const SIDEBAR_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DIALOG_WIDTH: f32 = 420.0;
    /// Text fields stop growing past this width on wide windows.
    pub const FORM_MAX_WIDTH: f32 = 560.0;
}

pub mod typography {
    /// Sidebar heading.
    pub const TITLE_LG: f32 = 28.0;
    /// Panel heading.
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Hints, descriptions and live values such as the subtitle size.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Validation cues and the selected swatch ring.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    /// Large enough to turn any box into a pill or a circle.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Lifted surfaces: dialogs and toasts.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// Scales must stay ordered; components pick "one step up" by name.
const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);

    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);

    assert!(opacity::SURFACE < opacity::OPAQUE);
    assert!(sizing::SWATCH < sizing::AVATAR);
};
