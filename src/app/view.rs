// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::notifications::{self, Toast};
use crate::ui::settings::State as SettingsState;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub settings: &'a SettingsState,
    pub notifications: &'a notifications::Manager,
    pub window_width: f32,
    pub now: Instant,
}

/// Renders the settings screen with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = Container::new(
        ctx.settings
            .view(ctx.now, ctx.window_width)
            .map(Message::Settings),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .push(screen)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
