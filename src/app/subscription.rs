// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes feed the responsive layout, and Ctrl/Cmd+S triggers the
//! active panel's save button. A periodic tick runs only while something
//! time-based is on screen.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick interval for toast expiry and the avatar fade-in.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) if (c.as_str() == "s" || c.as_str() == "S") && modifiers.command() => {
            Some(Message::SaveShortcut)
        }
        _ => None,
    })
}

pub fn create_tick_subscription(has_notification: bool, is_animating: bool) -> Subscription<Message> {
    if has_notification || is_animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
