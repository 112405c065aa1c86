// SPDX-License-Identifier: MPL-2.0
//! Settings screen.
//!
//! The screen is split into small components, one per concern, each with its
//! own `Message` and `update`. [`State::update`] routes messages to them and
//! returns an [`Effect`] describing asynchronous work (file dialog, image
//! decode, account service calls) for the application to run. Results come
//! back as ordinary messages.
//!
//! Components never reach for globals: the preference store and the
//! notification sink arrive through [`UpdateContext`].

pub mod actions;
pub mod appearance;
pub mod credential;
pub mod dialog;
pub mod navigation;
pub mod playback;
pub mod profile;
pub mod toggles;

use crate::app::config::Config;
use crate::error::Result;
use crate::preferences::PreferenceStore;
use crate::services::{NotificationSnapshot, SettingsSnapshot};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notifier;
use crate::ui::styles;
use crate::ui::theming::AccentScheme;
use actions::{resolve_deletion_prompt, ActionKind, Actions, PromptDecision};
use dialog::{Dialog, Resolution};
use iced::widget::{
    button, column, container, text, Column, Container, Id, Row, Scrollable, Space, Stack,
};
use iced::{alignment, Element, Length, Theme};
use navigation::{Navigation, Panel};
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use toggles::ids;

/// Scrollable holding the active panel.
pub const PANEL_SCROLL_ID: &str = "settings-panel-scroll";

/// Render-time data shared by the component views.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub accent: AccentScheme,
    pub now: Instant,
    pub fade_in: Duration,
    /// Largest accepted profile image.
    pub max_image_bytes: u64,
    /// Window is at most the narrow-viewport width.
    pub narrow: bool,
}

/// Mutable collaborators handed to [`State::update`].
pub struct UpdateContext<'a> {
    pub store: &'a mut dyn PreferenceStore,
    pub notifier: &'a mut dyn Notifier,
    pub viewport_width: f32,
    pub now: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigate(usize),
    Profile(profile::Message),
    Credential(credential::Message),
    Appearance(appearance::Message),
    Playback(playback::Message),
    Toggle(toggles::Message),
    ActionRequested(ActionKind),
    ActionFinished(ActionKind, Result<()>),
    Dialog(dialog::Message),
    Save(Panel),
    SaveFinished(Panel, Result<()>),
}

/// Work the application runs on behalf of the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    ScrollToTop,
    PickProfileImage,
    DecodeProfileImage(PathBuf),
    SaveSettings(Panel, SettingsSnapshot),
    RunAccountAction(ActionKind),
}

#[derive(Debug, Clone, Copy)]
struct Limits {
    max_image_bytes: u64,
    fade_in: Duration,
    narrow_viewport_width: f32,
}

impl From<&Config> for Limits {
    fn from(config: &Config) -> Self {
        Self {
            max_image_bytes: config.max_image_bytes(),
            fade_in: config.fade_in(),
            narrow_viewport_width: config.narrow_viewport_width(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    navigation: Navigation,
    profile: profile::Profile,
    credential: credential::Credential,
    appearance: appearance::Appearance,
    playback: playback::Playback,
    toggles: toggles::Registry,
    actions: Actions,
    dialog: Option<Dialog>,
    /// Dialogs raised while another one was open, shown in arrival order.
    queued_dialogs: VecDeque<Dialog>,
    saving: BTreeSet<Panel>,
    limits: Limits,
}

impl State {
    /// Builds the screen with every persisted preference applied.
    pub fn restore(store: &dyn PreferenceStore, config: &Config) -> Self {
        let mut toggles = toggles::Registry::default();
        toggles.restore(store);

        Self {
            navigation: Navigation::default(),
            profile: profile::Profile::default(),
            credential: credential::Credential::default(),
            appearance: appearance::Appearance::restore(store),
            playback: playback::Playback::restore(store),
            toggles,
            actions: Actions::default(),
            dialog: None,
            queued_dialogs: VecDeque::new(),
            saving: BTreeSet::new(),
            limits: Limits::from(config),
        }
    }

    pub fn update(&mut self, message: Message, ctx: &mut UpdateContext<'_>) -> Effect {
        match message {
            Message::Navigate(index) => {
                if self.navigation.activate(index)
                    && ctx.viewport_width <= self.limits.narrow_viewport_width
                {
                    Effect::ScrollToTop
                } else {
                    Effect::None
                }
            }
            Message::Profile(message) => {
                match self.profile.update(
                    message,
                    ctx.notifier,
                    self.limits.max_image_bytes,
                    ctx.now,
                ) {
                    profile::Event::None => Effect::None,
                    profile::Event::PickFile => Effect::PickProfileImage,
                    profile::Event::Decode(path) => Effect::DecodeProfileImage(path),
                }
            }
            Message::Credential(message) => {
                self.credential.update(message);
                Effect::None
            }
            Message::Appearance(message) => {
                self.appearance.update(message, ctx.store, ctx.notifier);
                Effect::None
            }
            Message::Playback(message) => {
                self.playback.update(message, ctx.store, ctx.notifier);
                Effect::None
            }
            Message::Toggle(message) => {
                self.toggles.update(message, ctx.store, ctx.notifier);
                Effect::None
            }
            Message::ActionRequested(action) => {
                if self.dialog.is_none() && !self.actions.is_busy(action) {
                    self.dialog = Some(action.confirmation());
                }
                Effect::None
            }
            Message::Dialog(message) => {
                let Some(resolution) = self.dialog.as_mut().and_then(|d| d.update(message))
                else {
                    return Effect::None;
                };
                self.dialog = self.queued_dialogs.pop_front();
                self.resolve(resolution, ctx.notifier)
            }
            Message::ActionFinished(action, result) => {
                if let Some(alert) = self.actions.finish(action, result, ctx.notifier) {
                    self.open_dialog(alert);
                }
                Effect::None
            }
            Message::Save(panel) => {
                if !panel.has_save_button() || !self.saving.insert(panel) {
                    return Effect::None;
                }
                log::debug!("saving {panel:?} panel");
                Effect::SaveSettings(panel, self.snapshot())
            }
            Message::SaveFinished(panel, result) => {
                self.saving.remove(&panel);
                match result {
                    Ok(()) => {
                        ctx.notifier.success("Settings saved successfully!");
                        log_snapshot(&self.snapshot());
                    }
                    Err(err) => {
                        log::warn!("Saving {panel:?} settings failed: {err}");
                        ctx.notifier.error("Settings could not be saved");
                    }
                }
                Effect::None
            }
        }
    }

    fn resolve(&mut self, resolution: Resolution, notifier: &mut dyn Notifier) -> Effect {
        match resolution {
            Resolution::Confirmed(action) => self.start(action),
            Resolution::Declined(_) | Resolution::Acknowledged => Effect::None,
            Resolution::Answered(action, response) => {
                match resolve_deletion_prompt(response.as_deref()) {
                    PromptDecision::Proceed => self.start(action),
                    PromptDecision::Cancelled => {
                        notifier.warning("Account deletion cancelled");
                        Effect::None
                    }
                    PromptDecision::Dismissed => Effect::None,
                }
            }
        }
    }

    fn open_dialog(&mut self, dialog: Dialog) {
        if self.dialog.is_some() {
            self.queued_dialogs.push_back(dialog);
        } else {
            self.dialog = Some(dialog);
        }
    }

    fn start(&mut self, action: ActionKind) -> Effect {
        if self.actions.start(action) {
            Effect::RunAccountAction(action)
        } else {
            Effect::None
        }
    }

    /// Save request for the active panel, when it has an idle save button.
    #[must_use]
    pub fn save_shortcut(&self) -> Option<Message> {
        let panel = self.navigation.active_panel()?;
        (panel.has_save_button() && !self.saving.contains(&panel)).then_some(Message::Save(panel))
    }

    /// Current form values.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            username: self.profile.username().to_string(),
            email: self.profile.email().to_string(),
            bio: self.profile.bio().to_string(),
            theme: self.appearance.mode().as_str().to_string(),
            accent_color: self.appearance.scheme().base.to_hex(),
            video_quality: self.playback.quality().as_str().to_string(),
            subtitle_lang: self.playback.language().code().to_string(),
            subtitle_size: self.playback.subtitle_size(),
            autoplay: self.toggles.is_on(ids::AUTOPLAY),
            two_factor: self.toggles.is_on(ids::TWO_FACTOR),
            notifications: NotificationSnapshot {
                episodes: self.toggles.is_on(ids::EPISODES),
                bookmarks: self.toggles.is_on(ids::BOOKMARKS),
                releases: self.toggles.is_on(ids::RELEASES),
                comments: self.toggles.is_on(ids::COMMENTS),
            },
        }
    }

    /// True while the profile preview is fading in.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.profile
            .preview()
            .is_some_and(|preview| preview.is_fading(now, self.limits.fade_in))
    }

    #[must_use]
    pub fn is_saving(&self, panel: Panel) -> bool {
        self.saving.contains(&panel)
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.appearance.theme()
    }

    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn profile(&self) -> &profile::Profile {
        &self.profile
    }

    #[must_use]
    pub fn credential(&self) -> &credential::Credential {
        &self.credential
    }

    #[must_use]
    pub fn appearance(&self) -> &appearance::Appearance {
        &self.appearance
    }

    #[must_use]
    pub fn playback(&self) -> &playback::Playback {
        &self.playback
    }

    #[must_use]
    pub fn toggles(&self) -> &toggles::Registry {
        &self.toggles
    }

    #[must_use]
    pub fn actions(&self) -> &Actions {
        &self.actions
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn view(&self, now: Instant, viewport_width: f32) -> Element<'_, Message> {
        let ctx = ViewContext {
            accent: self.appearance.scheme(),
            now,
            fade_in: self.limits.fade_in,
            max_image_bytes: self.limits.max_image_bytes,
            narrow: viewport_width <= self.limits.narrow_viewport_width,
        };

        let content = Scrollable::new(
            Container::new(self.view_panel(&ctx))
                .padding(spacing::XL)
                .width(Length::Fill),
        )
        .id(Id::new(PANEL_SCROLL_ID))
        .height(Length::Fill);

        let screen: Element<'_, Message> = if ctx.narrow {
            column![self.view_sidebar(&ctx), content].into()
        } else {
            Row::new()
                .push(self.view_sidebar(&ctx))
                .push(content)
                .into()
        };

        match &self.dialog {
            Some(dialog) => Stack::new()
                .push(screen)
                .push(dialog.view(&ctx).map(Message::Dialog))
                .into(),
            None => screen,
        }
    }

    fn view_sidebar(&self, ctx: &ViewContext) -> Element<'_, Message> {
        let entries = self.navigation.entries().iter().enumerate().map(|(index, entry)| {
            button(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::sized(entry.glyph, sizing::ICON_SM))
                    .push(text(entry.label).size(typography::BODY)),
            )
            .width(if ctx.narrow { Length::Shrink } else { Length::Fill })
            .padding([spacing::XS, spacing::SM])
            .on_press(Message::Navigate(index))
            .style(styles::button::nav_entry(
                ctx.accent,
                self.navigation.is_active(index),
            ))
            .into()
        });

        if ctx.narrow {
            container(Row::with_children(entries).spacing(spacing::XXS).wrap())
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::sidebar)
                .into()
        } else {
            container(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        text("Settings")
                            .size(typography::TITLE_LG)
                            .color(ctx.accent.primary),
                    )
                    .push(Space::new().height(Length::Fixed(spacing::MD)))
                    .extend(entries),
            )
            .padding(spacing::MD)
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .style(styles::container::sidebar)
            .into()
        }
    }

    fn view_panel(&self, ctx: &ViewContext) -> Element<'_, Message> {
        let Some(panel) = self.navigation.active_panel() else {
            return text("Nothing to show here yet.").size(typography::BODY).into();
        };

        let body: Element<'_, Message> = match panel {
            Panel::Profile => self.profile.view(ctx).map(Message::Profile),
            Panel::Account => column![
                self.credential.view(ctx).map(Message::Credential),
                self.toggles.view(Panel::Account).map(Message::Toggle),
                self.action_row(
                    ActionKind::LogOutOtherSessions,
                    "Active sessions",
                    "Sign out everywhere except on this device",
                ),
            ]
            .spacing(spacing::LG)
            .into(),
            Panel::Appearance => self.appearance.view(ctx).map(Message::Appearance),
            Panel::Playback => column![
                self.playback.view().map(Message::Playback),
                self.toggles.view(Panel::Playback).map(Message::Toggle),
            ]
            .spacing(spacing::LG)
            .into(),
            Panel::Notifications => self.toggles.view(Panel::Notifications).map(Message::Toggle),
            Panel::Privacy => column![
                self.action_row(
                    ActionKind::ClearHistory,
                    "Watch history",
                    "Remove every title from your history",
                ),
                self.action_row(
                    ActionKind::DeleteAccount,
                    "Delete account",
                    "Permanently remove your account and data",
                ),
            ]
            .spacing(spacing::LG)
            .into(),
        };

        let mut card = Column::new()
            .spacing(spacing::LG)
            .push(text(panel.title()).size(typography::TITLE_MD))
            .push(body);

        if panel.has_save_button() {
            card = card.push(self.save_button(panel, ctx));
        }

        container(card)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }

    fn save_button(&self, panel: Panel, ctx: &ViewContext) -> Element<'_, Message> {
        let saving = self.is_saving(panel);
        let label = if saving { "Saving..." } else { "Save Changes" };

        Row::new()
            .push(Space::new().width(Length::Fill))
            .push(
                button(text(label))
                    .padding([spacing::XS, spacing::LG])
                    .on_press_maybe((!saving).then_some(Message::Save(panel)))
                    .style(styles::button::primary(ctx.accent)),
            )
            .into()
    }

    fn action_row(
        &self,
        action: ActionKind,
        title: &'static str,
        description: &'static str,
    ) -> Element<'_, Message> {
        let busy = self.actions.is_busy(action);
        let action_button = button(text(self.actions.label(action)))
            .padding([spacing::XS, spacing::MD])
            .on_press_maybe((!busy).then_some(Message::ActionRequested(action)));
        let action_button = if action == ActionKind::DeleteAccount {
            action_button.style(styles::button::danger)
        } else {
            action_button.style(styles::button::secondary)
        };

        Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                column![
                    text(title).size(typography::BODY),
                    text(description).size(typography::CAPTION),
                ]
                .spacing(spacing::XXS),
            )
            .push(Space::new().width(Length::Fill))
            .push(action_button)
            .into()
    }
}

fn log_snapshot(snapshot: &SettingsSnapshot) {
    match toml::to_string(snapshot) {
        Ok(rendered) => log::info!("Settings saved:\n{rendered}"),
        Err(err) => log::info!("Settings saved: {snapshot:?} ({err})"),
    }
}
