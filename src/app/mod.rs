// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the settings screen together with its collaborators
//! (preference store, toast manager, account service) and turns the effects
//! the screen requests into Iced tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::preferences::{LocalStore, PreferenceStore};
use crate::services::{AccountService, SimulatedAccountService};
use crate::ui::notifications::{self, Notifier};
use crate::ui::settings::State as SettingsState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    settings: SettingsState,
    store: Box<dyn PreferenceStore>,
    notifications: notifications::Manager,
    service: Arc<dyn AccountService>,
    window_width: f32,
    /// Instant of the last tick, drives time-based rendering.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_panel", &self.settings.navigation().active_panel())
            .field("window_width", &self.window_width)
            .field("toast_visible", &self.notifications.is_visible())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and preferences from their default locations and builds
    /// the screen with the simulated account service.
    fn new(_flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (store, store_warning) = LocalStore::load();
        let service = SimulatedAccountService::new(config.save_delay(), config.confirm_delay());

        let mut app = Self::with_services(&config, Box::new(store), Arc::new(service));
        for warning in [config_warning, store_warning].into_iter().flatten() {
            app.notifications.warning(&warning);
        }

        log::info!("Settings screen initialized");
        (app, Task::none())
    }

    /// Builds the application around explicit collaborators.
    pub fn with_services(
        config: &config::Config,
        store: Box<dyn PreferenceStore>,
        service: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            settings: SettingsState::restore(store.as_ref(), config),
            store,
            notifications: notifications::Manager::new(config.toast_duration()),
            service,
            window_width: WINDOW_DEFAULT_WIDTH,
            now: Instant::now(),
        }
    }

    fn title(&self) -> String {
        match self.settings.navigation().active_panel() {
            Some(panel) => format!("{} - Settings", panel.title()),
            None => "Settings".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.settings.theme().clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.is_visible(),
            self.settings.is_animating(Instant::now()),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            settings: &mut self.settings,
            store: self.store.as_mut(),
            notifications: &mut self.notifications,
            service: &self.service,
            window_width: &mut self.window_width,
            now: &mut self.now,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            settings: &self.settings,
            notifications: &self.notifications,
            window_width: self.window_width,
            now: self.now,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{keys, MemoryStore};
    use crate::ui::settings::{self, navigation::Panel};
    use crate::ui::theming::ThemeMode;
    use std::time::Duration;

    fn app_with(store: MemoryStore) -> App {
        App::with_services(
            &config::Config::default(),
            Box::new(store),
            Arc::new(SimulatedAccountService::new(Duration::ZERO, Duration::ZERO)),
        )
    }

    #[test]
    fn restores_preferences_into_the_screen() {
        let store: MemoryStore = [(keys::THEME, "light"), (keys::ACCENT_COLOR, "#22c55e")]
            .into_iter()
            .collect();
        let app = app_with(store);

        assert_eq!(app.settings().appearance().mode(), ThemeMode::Light);
        assert_eq!(app.settings().appearance().scheme().base.to_hex(), "#22c55e");
    }

    #[test]
    fn theme_changes_reach_the_store_and_toast() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::Settings(settings::Message::Appearance(
            settings::appearance::Message::DarkModeToggled(false),
        )));

        assert_eq!(app.store().get(keys::THEME).as_deref(), Some("light"));
        assert_eq!(
            app.notifications().current().map(|n| n.message()),
            Some("Light mode activated")
        );
    }

    #[test]
    fn title_follows_active_panel() {
        let mut app = app_with(MemoryStore::new());
        assert_eq!(app.title(), "Profile - Settings");
        let _ = app.update(Message::Settings(settings::Message::Navigate(4)));
        assert_eq!(app.title(), "Notifications - Settings");
    }

    #[test]
    fn save_shortcut_starts_saving_active_panel() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::SaveShortcut);
        assert!(app.settings().is_saving(Panel::Profile));
    }

    #[test]
    fn resize_updates_window_width() {
        let mut app = app_with(MemoryStore::new());
        let _ = app.update(Message::WindowResized(iced::Size::new(600.0, 800.0)));
        assert!((app.window_width - 600.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tick_expires_toasts() {
        let mut app = app_with(MemoryStore::new());
        app.notifications.warning("Saved preferences could not be read");
        let later = Instant::now() + app.notifications.duration();
        let _ = app.update(Message::Tick(later));
        assert!(!app.notifications().is_visible());
    }
}
