// SPDX-License-Identifier: MPL-2.0
//! `iced_prefs` is the settings screen of a streaming client, built with the
//! Iced GUI framework.
//!
//! It covers profile editing, account security, appearance (theme and accent
//! color), video playback preferences, notification switches and privacy
//! actions. Preferences persist through a small key/value store and account
//! operations go through an injectable service.

pub mod app;
pub mod error;
pub mod preferences;
pub mod services;
pub mod ui;
