// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Accent-aware styles take the current [`AccentScheme`] so hover and glow
//! shades follow the user's accent choice.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::AccentScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary action button (save, confirm) filled with the accent.
pub fn primary(accent: AccentScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(accent.primary)),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(accent.hover)),
            text_color: palette::GRAY_900,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: glow(accent),
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Destructive action button.
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OPAQUE,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Active => 0.85,
        button::Status::Disabled => return disabled(theme),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::DANGER_500
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Low-emphasis button (cancel, inline actions).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        button::Status::Active | button::Status::Disabled => palette.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sidebar navigation entry. The active entry is tinted with the accent glow.
pub fn nav_entry(
    accent: AccentScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.palette().text;
        let (background, text_color) = if active {
            (Some(Background::Color(accent.glow)), accent.primary)
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => (
                    Some(Background::Color(Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..palette::GRAY_400
                    })),
                    text,
                ),
                _ => (None, text),
            }
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round accent swatch. The selected swatch gets a ring and the glow.
pub fn swatch(
    color: Color,
    selected: bool,
    accent: AccentScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring = if selected {
            Border {
                color: theme.palette().text,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            }
        } else {
            Border {
                radius: radius::FULL.into(),
                ..Default::default()
            }
        };
        let shadow = if selected || matches!(status, button::Status::Hovered) {
            glow(accent)
        } else {
            shadow::NONE
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: ring,
            shadow,
            snap: true,
        }
    }
}

/// Grayed out, non-interactive button.
pub fn disabled(theme: &Theme) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Soft accent-colored halo.
fn glow(accent: AccentScheme) -> Shadow {
    Shadow {
        color: accent.glow,
        offset: Vector::ZERO,
        blur_radius: 12.0,
    }
}
