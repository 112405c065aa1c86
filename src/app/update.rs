// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Settings messages are routed to the screen; the [`Effect`] it returns is
//! turned into an Iced task here so the screen itself never touches the
//! runtime.

use super::Message;
use crate::preferences::PreferenceStore;
use crate::services::AccountService;
use crate::ui::notifications;
use crate::ui::settings::profile::{self, SelectedFile};
use crate::ui::settings::{
    self, actions::ActionKind, Effect, State as SettingsState, PANEL_SCROLL_ID,
};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

/// Image extensions offered by the profile picture dialog.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Mutable application state borrowed for a single update.
pub struct UpdateContext<'a> {
    pub settings: &'a mut SettingsState,
    pub store: &'a mut dyn PreferenceStore,
    pub notifications: &'a mut notifications::Manager,
    pub service: &'a Arc<dyn AccountService>,
    pub window_width: &'a mut f32,
    pub now: &'a mut Instant,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Settings(message) => handle_settings_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::Tick(now) => {
            *ctx.now = now;
            ctx.notifications.tick(now);
            Task::none()
        }
        Message::WindowResized(size) => {
            *ctx.window_width = size.width;
            Task::none()
        }
        Message::SaveShortcut => match ctx.settings.save_shortcut() {
            Some(message) => handle_settings_message(ctx, message),
            None => Task::none(),
        },
    }
}

fn handle_settings_message(ctx: &mut UpdateContext<'_>, message: settings::Message) -> Task<Message> {
    let now = Instant::now();
    *ctx.now = now;

    let mut settings_ctx = settings::UpdateContext {
        store: &mut *ctx.store,
        notifier: &mut *ctx.notifications,
        viewport_width: *ctx.window_width,
        now,
    };
    let effect = ctx.settings.update(message, &mut settings_ctx);
    run_effect(effect, ctx.service)
}

fn run_effect(effect: Effect, service: &Arc<dyn AccountService>) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::ScrollToTop => operation::snap_to(
            Id::new(PANEL_SCROLL_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        ),
        Effect::PickProfileImage => handle_pick_profile_image(),
        Effect::DecodeProfileImage(path) => Task::perform(profile::decode_preview(path), |result| {
            Message::Settings(settings::Message::Profile(
                profile::Message::PreviewDecoded(result),
            ))
        }),
        Effect::SaveSettings(panel, snapshot) => {
            Task::perform(service.save_settings(snapshot), move |result| {
                Message::Settings(settings::Message::SaveFinished(panel, result))
            })
        }
        Effect::RunAccountAction(action) => {
            let future = match action {
                ActionKind::ClearHistory => service.clear_watch_history(),
                ActionKind::LogOutOtherSessions => service.log_out_other_sessions(),
                ActionKind::DeleteAccount => service.request_account_deletion(),
            };
            Task::perform(future, move |result| {
                Message::Settings(settings::Message::ActionFinished(action, result))
            })
        }
    }
}

/// Opens the native picker and inspects the chosen file.
fn handle_pick_profile_image() -> Task<Message> {
    Task::perform(
        async move {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .add_filter("All files", &["*"])
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf());

            match picked {
                Some(path) => SelectedFile::inspect(&path).map(Some),
                None => Ok(None),
            }
        },
        |result| Message::Settings(settings::Message::Profile(profile::Message::FileChosen(result))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;
    use crate::services::SimulatedAccountService;
    use crate::ui::settings::navigation::Panel;
    use std::time::Duration;

    struct Fixture {
        settings: SettingsState,
        store: MemoryStore,
        notifications: notifications::Manager,
        service: Arc<dyn AccountService>,
        window_width: f32,
        now: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            let store = MemoryStore::new();
            Self {
                settings: SettingsState::restore(&store, &crate::app::config::Config::default()),
                store,
                notifications: notifications::Manager::default(),
                service: Arc::new(SimulatedAccountService::new(Duration::ZERO, Duration::ZERO)),
                window_width: 1280.0,
                now: Instant::now(),
            }
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                settings: &mut self.settings,
                store: &mut self.store,
                notifications: &mut self.notifications,
                service: &self.service,
                window_width: &mut self.window_width,
                now: &mut self.now,
            };
            let _ = update(&mut ctx, message);
        }
    }

    #[test]
    fn dismiss_hides_toast() {
        let mut fixture = Fixture::new();
        fixture.send(Message::Settings(settings::Message::Appearance(
            settings::appearance::Message::DarkModeToggled(true),
        )));
        assert!(fixture.notifications.is_visible());

        fixture.send(Message::Notification(
            notifications::NotificationMessage::Dismiss,
        ));
        assert!(!fixture.notifications.is_visible());
    }

    #[test]
    fn save_shortcut_is_ignored_on_panels_without_save() {
        let mut fixture = Fixture::new();
        fixture.send(Message::Settings(settings::Message::Navigate(5)));
        fixture.send(Message::SaveShortcut);
        assert!(!fixture.settings.is_saving(Panel::Privacy));
        assert!(!fixture.settings.is_saving(Panel::Profile));
    }

    #[test]
    fn tick_records_current_instant() {
        let mut fixture = Fixture::new();
        let later = fixture.now + Duration::from_millis(250);
        fixture.send(Message::Tick(later));
        assert_eq!(fixture.now, later);
    }
}
