// SPDX-License-Identifier: MPL-2.0
//! Appearance panel: theme mode and accent color.

use super::ViewContext;
use crate::preferences::{self, keys, PreferenceStore};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notifier;
use crate::ui::styles;
use crate::ui::theming::{
    build_theme, AccentColor, AccentScheme, ThemeMode, ACCENT_SWATCHES,
};
use iced::widget::{button, column, text, toggler, Row, Space};
use iced::{alignment, Element, Length, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Toggler state; checked means dark mode.
    DarkModeToggled(bool),
    AccentSelected(AccentColor),
}

#[derive(Debug, Clone)]
pub struct Appearance {
    mode: ThemeMode,
    scheme: AccentScheme,
    theme: Theme,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(ThemeMode::default(), AccentColor::default())
    }
}

impl Appearance {
    #[must_use]
    pub fn new(mode: ThemeMode, accent: AccentColor) -> Self {
        let scheme = AccentScheme::new(accent);
        Self {
            mode,
            scheme,
            theme: build_theme(mode, &scheme),
        }
    }

    /// Reads the persisted theme and accent, falling back to the defaults.
    pub fn restore(store: &dyn PreferenceStore) -> Self {
        let mode = match store.get(keys::THEME) {
            Some(value) => ThemeMode::parse(&value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown persisted theme '{value}'");
                ThemeMode::default()
            }),
            None => ThemeMode::default(),
        };

        let accent = match store.get(keys::ACCENT_COLOR) {
            Some(value) => AccentColor::from_hex(&value).unwrap_or_else(|| {
                log::warn!("Ignoring malformed persisted accent color '{value}'");
                AccentColor::default()
            }),
            None => AccentColor::default(),
        };

        Self::new(mode, accent)
    }

    pub fn update(
        &mut self,
        message: Message,
        store: &mut dyn PreferenceStore,
        notifier: &mut dyn Notifier,
    ) {
        match message {
            Message::DarkModeToggled(dark) => {
                let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
                self.apply(mode, self.scheme.base);
                preferences::persist(store, keys::THEME, mode.as_str());
                notifier.success(mode.activation_message());
            }
            Message::AccentSelected(accent) => {
                self.apply(self.mode, accent);
                preferences::persist(store, keys::ACCENT_COLOR, &accent.to_hex());
                notifier.success("Accent color updated");
            }
        }
    }

    fn apply(&mut self, mode: ThemeMode, accent: AccentColor) {
        *self = Self::new(mode, accent);
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn scheme(&self) -> AccentScheme {
        self.scheme
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Index of the swatch matching the current accent, if any.
    #[must_use]
    pub fn active_swatch(&self) -> Option<usize> {
        let current = self.scheme.base.to_hex();
        ACCENT_SWATCHES.iter().position(|hex| *hex == current)
    }

    pub fn view<'a>(&'a self, ctx: &ViewContext) -> Element<'a, Message> {
        let theme_row = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                column![
                    text("Dark mode").size(typography::BODY),
                    text("Switch between dark and light themes").size(typography::CAPTION),
                ]
                .spacing(spacing::XXS),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                toggler(self.mode.is_dark())
                    .on_toggle(Message::DarkModeToggled)
                    .size(20.0),
            );

        let active = self.active_swatch();
        let swatches = ACCENT_SWATCHES
            .iter()
            .enumerate()
            .filter_map(|(index, hex)| AccentColor::from_hex(hex).map(|color| (index, color)))
            .fold(Row::new().spacing(spacing::SM), |row, (index, color)| {
                row.push(
                    button(Space::new())
                        .width(Length::Fixed(sizing::SWATCH))
                        .height(Length::Fixed(sizing::SWATCH))
                        .on_press(Message::AccentSelected(color))
                        .style(styles::button::swatch(
                            color.to_color(),
                            active == Some(index),
                            ctx.accent,
                        )),
                )
            });

        column![
            theme_row,
            column![text("Accent color").size(typography::BODY), swatches].spacing(spacing::XS),
        ]
        .spacing(spacing::LG)
        .into()
    }
}
