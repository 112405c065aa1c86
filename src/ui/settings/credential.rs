// SPDX-License-Identifier: MPL-2.0
//! Password field with a show/hide toggle.

use super::profile::labeled;
use super::ViewContext;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::styles::input::Cue;
use iced::widget::{button, text_input, Row};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PasswordChanged(String),
    ToggleVisibility,
}

#[derive(Debug, Clone, Default)]
pub struct Credential {
    password: String,
    revealed: bool,
}

impl Credential {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::PasswordChanged(value) => self.password = value,
            Message::ToggleVisibility => self.revealed = !self.revealed,
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Eye while obscured, eye-slash while plain text.
    #[must_use]
    pub fn toggle_glyph(&self) -> &'static str {
        if self.revealed {
            icons::EYE_SLASH
        } else {
            icons::EYE
        }
    }

    pub fn view<'a>(&'a self, ctx: &ViewContext) -> Element<'a, Message> {
        let input = text_input("New password", &self.password)
            .secure(!self.revealed)
            .on_input(Message::PasswordChanged)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::input::field(Cue::Neutral, ctx.accent));

        let toggle = button(icons::sized(self.toggle_glyph(), sizing::ICON_SM))
            .on_press(Message::ToggleVisibility)
            .padding(spacing::XS)
            .style(styles::button::secondary);

        labeled(
            "Password",
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(input)
                .push(toggle),
        )
    }
}
