// SPDX-License-Identifier: MPL-2.0
//! Destructive account actions guarded by a confirmation.
//!
//! A request opens a [`Dialog`]. Once confirmed, the action is marked busy
//! (its button shows the busy label and stops accepting presses) while the
//! account service runs it. Completion restores the label and reports the
//! outcome.

use super::dialog::Dialog;
use crate::error::Result;
use crate::ui::notifications::Notifier;
use std::collections::BTreeSet;

/// Literal the deletion prompt must receive.
pub const DELETE_CONFIRMATION: &str = "DELETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    ClearHistory,
    LogOutOtherSessions,
    DeleteAccount,
}

impl ActionKind {
    #[must_use]
    pub fn idle_label(self) -> &'static str {
        match self {
            ActionKind::ClearHistory => "Clear History",
            ActionKind::LogOutOtherSessions => "Log Out All",
            ActionKind::DeleteAccount => "Delete Account",
        }
    }

    #[must_use]
    pub fn busy_label(self) -> &'static str {
        match self {
            ActionKind::ClearHistory => "Clearing...",
            ActionKind::LogOutOtherSessions => "Logging out...",
            ActionKind::DeleteAccount => "Deleting...",
        }
    }

    /// Dialog asking the user to confirm this action.
    #[must_use]
    pub fn confirmation(self) -> Dialog {
        match self {
            ActionKind::ClearHistory => Dialog::Confirm {
                action: self,
                message: "Are you sure you want to clear your watch history? \
                          This action cannot be undone.",
            },
            ActionKind::LogOutOtherSessions => Dialog::Confirm {
                action: self,
                message: "Are you sure you want to log out from all devices except this one?",
            },
            ActionKind::DeleteAccount => Dialog::Prompt {
                action: self,
                message: "This action is irreversible. Type \"DELETE\" to confirm:",
                input: String::new(),
            },
        }
    }
}

/// What to do with the answer to the deletion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptDecision {
    Proceed,
    /// Answered with anything else, including an empty string.
    Cancelled,
    /// Prompt dismissed without an answer.
    Dismissed,
}

#[must_use]
pub fn resolve_deletion_prompt(response: Option<&str>) -> PromptDecision {
    match response {
        Some(DELETE_CONFIRMATION) => PromptDecision::Proceed,
        Some(_) => PromptDecision::Cancelled,
        None => PromptDecision::Dismissed,
    }
}

/// Busy state of the action buttons.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    busy: BTreeSet<ActionKind>,
}

impl Actions {
    #[must_use]
    pub fn is_busy(&self, action: ActionKind) -> bool {
        self.busy.contains(&action)
    }

    #[must_use]
    pub fn any_busy(&self) -> bool {
        !self.busy.is_empty()
    }

    #[must_use]
    pub fn label(&self, action: ActionKind) -> &'static str {
        if self.is_busy(action) {
            action.busy_label()
        } else {
            action.idle_label()
        }
    }

    /// Marks `action` busy. Returns `false` when it already runs.
    pub fn start(&mut self, action: ActionKind) -> bool {
        log::debug!("starting {action:?}");
        self.busy.insert(action)
    }

    /// Restores the idle label and reports the outcome. Returns the
    /// acknowledgement dialog deletion requires.
    pub fn finish(
        &mut self,
        action: ActionKind,
        result: Result<()>,
        notifier: &mut dyn Notifier,
    ) -> Option<Dialog> {
        self.busy.remove(&action);

        if let Err(err) = result {
            log::warn!("{action:?} failed: {err}");
            notifier.error(&format!("{} failed. Please try again.", action.idle_label()));
            return None;
        }

        log::debug!("{action:?} finished");
        match action {
            ActionKind::ClearHistory => {
                notifier.success("Watch history cleared successfully");
                None
            }
            ActionKind::LogOutOtherSessions => {
                notifier.success("Logged out from all other devices");
                None
            }
            ActionKind::DeleteAccount => Some(Dialog::Alert {
                message: "Account deletion initiated. You will receive a confirmation email.",
            }),
        }
    }
}
