// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`settings`] - The settings screen and its panels
//! - [`notifications`] - Toast notification system for user feedback
//! - [`theming`] - Dark/Light mode and accent color derivation
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Glyph icons used across the screen

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod settings;
pub mod styles;
pub mod theming;
