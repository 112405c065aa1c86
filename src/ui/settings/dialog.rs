// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs: yes/no confirmation, text prompt and acknowledgement.

use super::actions::ActionKind;
use super::ViewContext;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, opaque, text, text_input, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Yes/no question guarding `action`.
    Confirm {
        action: ActionKind,
        message: &'static str,
    },
    /// Free-text question guarding `action`.
    Prompt {
        action: ActionKind,
        message: &'static str,
        input: String,
    },
    /// Blocking notice with a single OK button.
    Alert { message: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    InputChanged(String),
    Accept,
    Decline,
}

/// How a dialog was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Confirmed(ActionKind),
    Declined(ActionKind),
    /// Prompt closed with OK (`Some(text)`) or dismissed (`None`).
    Answered(ActionKind, Option<String>),
    Acknowledged,
}

impl Dialog {
    /// Applies `message`. Returns the resolution once the dialog closes,
    /// or `None` while it stays open.
    pub fn update(&mut self, message: Message) -> Option<Resolution> {
        match (self, message) {
            (Dialog::Prompt { input, .. }, Message::InputChanged(value)) => {
                *input = value;
                None
            }
            (_, Message::InputChanged(_)) => None,
            (Dialog::Confirm { action, .. }, Message::Accept) => {
                Some(Resolution::Confirmed(*action))
            }
            (Dialog::Confirm { action, .. }, Message::Decline) => {
                Some(Resolution::Declined(*action))
            }
            (Dialog::Prompt { action, input, .. }, Message::Accept) => {
                Some(Resolution::Answered(*action, Some(std::mem::take(input))))
            }
            (Dialog::Prompt { action, .. }, Message::Decline) => {
                Some(Resolution::Answered(*action, None))
            }
            (Dialog::Alert { .. }, Message::Accept | Message::Decline) => {
                Some(Resolution::Acknowledged)
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: &ViewContext) -> Element<'a, Message> {
        let primary = styles::button::primary(ctx.accent);

        let body: Element<'a, Message> = match self {
            Dialog::Confirm { message, .. } => column![
                text(*message).size(typography::BODY),
                Row::new()
                    .spacing(spacing::XS)
                    .push(Space::new().width(Length::Fill))
                    .push(
                        button(text("Cancel"))
                            .on_press(Message::Decline)
                            .style(styles::button::secondary)
                    )
                    .push(button(text("OK")).on_press(Message::Accept).style(primary)),
            ]
            .spacing(spacing::LG)
            .into(),
            Dialog::Prompt { message, input, .. } => column![
                text(*message).size(typography::BODY),
                text_input("", input)
                    .on_input(Message::InputChanged)
                    .on_submit(Message::Accept)
                    .padding(spacing::XS)
                    .style(styles::input::field(Default::default(), ctx.accent)),
                Row::new()
                    .spacing(spacing::XS)
                    .push(Space::new().width(Length::Fill))
                    .push(
                        button(text("Cancel"))
                            .on_press(Message::Decline)
                            .style(styles::button::secondary)
                    )
                    .push(button(text("OK")).on_press(Message::Accept).style(primary)),
            ]
            .spacing(spacing::MD)
            .into(),
            Dialog::Alert { message } => column![
                text(*message).size(typography::BODY),
                Row::new()
                    .push(Space::new().width(Length::Fill))
                    .push(button(text("OK")).on_press(Message::Accept).style(primary)),
            ]
            .spacing(spacing::LG)
            .into(),
        };

        let card = container(body)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog);

        opaque(
            container(card)
                .center(Length::Fill)
                .style(styles::container::modal_backdrop),
        )
    }
}
