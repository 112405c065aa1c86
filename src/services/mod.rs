// SPDX-License-Identifier: MPL-2.0
//! Account operations triggered from the settings screen.
//!
//! The screen only talks to the [`AccountService`] trait. Each operation
//! returns a boxed future that resolves once the backend is done, so a real
//! client can replace [`SimulatedAccountService`] without touching the
//! callers. The update loop wraps these futures in `Task::perform`.

use crate::error::Result;
use futures_util::future::{BoxFuture, FutureExt};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Form values handed to the backend when a panel is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSnapshot {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub theme: String,
    pub accent_color: String,
    pub video_quality: String,
    pub subtitle_lang: String,
    pub subtitle_size: u16,
    pub autoplay: bool,
    pub two_factor: bool,
    pub notifications: NotificationSnapshot,
}

/// Notification toggles inside a [`SettingsSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSnapshot {
    pub episodes: bool,
    pub bookmarks: bool,
    pub releases: bool,
    pub comments: bool,
}

/// Backend operations the settings screen can request.
pub trait AccountService: fmt::Debug + Send + Sync {
    fn save_settings(&self, snapshot: SettingsSnapshot) -> BoxFuture<'static, Result<()>>;

    fn clear_watch_history(&self) -> BoxFuture<'static, Result<()>>;

    fn log_out_other_sessions(&self) -> BoxFuture<'static, Result<()>>;

    fn request_account_deletion(&self) -> BoxFuture<'static, Result<()>>;
}

/// Stand-in backend that succeeds after fixed delays.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAccountService {
    save_delay: Duration,
    action_delay: Duration,
}

impl SimulatedAccountService {
    #[must_use]
    pub fn new(save_delay: Duration, action_delay: Duration) -> Self {
        Self {
            save_delay,
            action_delay,
        }
    }

    fn complete_after(delay: Duration, operation: &'static str) -> BoxFuture<'static, Result<()>> {
        async move {
            tokio::time::sleep(delay).await;
            log::debug!("simulated {operation} finished after {delay:?}");
            Ok(())
        }
        .boxed()
    }
}

impl AccountService for SimulatedAccountService {
    fn save_settings(&self, snapshot: SettingsSnapshot) -> BoxFuture<'static, Result<()>> {
        log::debug!("saving settings for '{}'", snapshot.username);
        Self::complete_after(self.save_delay, "save")
    }

    fn clear_watch_history(&self) -> BoxFuture<'static, Result<()>> {
        Self::complete_after(self.action_delay, "history clear")
    }

    fn log_out_other_sessions(&self) -> BoxFuture<'static, Result<()>> {
        Self::complete_after(self.action_delay, "session logout")
    }

    fn request_account_deletion(&self) -> BoxFuture<'static, Result<()>> {
        Self::complete_after(self.action_delay, "account deletion")
    }
}
