// SPDX-License-Identifier: MPL-2.0
//! Text input styles with validation cues.

use crate::ui::design_tokens::{border, palette};
use crate::ui::theming::AccentScheme;
use iced::widget::text_input;
use iced::Theme;

/// Inline validation state of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cue {
    #[default]
    Neutral,
    Warning,
    Danger,
}

/// Text input whose border reflects `cue`; focus uses the accent.
pub fn field(cue: Cue, accent: AccentScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        match cue {
            Cue::Warning => {
                style.border.color = palette::WARNING_500;
                style.border.width = border::WIDTH_MD;
            }
            Cue::Danger => {
                style.border.color = palette::DANGER_500;
                style.border.width = border::WIDTH_MD;
            }
            Cue::Neutral => {
                if matches!(status, text_input::Status::Focused { .. }) {
                    style.border.color = accent.primary;
                }
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_override_border_color() {
        let accent = AccentScheme::default();
        let warning = field(Cue::Warning, accent)(&Theme::Dark, text_input::Status::Active);
        let danger = field(Cue::Danger, accent)(&Theme::Dark, text_input::Status::Active);
        assert_eq!(warning.border.color, palette::WARNING_500);
        assert_eq!(danger.border.color, palette::DANGER_500);
    }
}
