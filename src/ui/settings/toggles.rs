// SPDX-License-Identifier: MPL-2.0
//! Persisted on/off switches.
//!
//! Every switch is declared once in [`BINDINGS`]. The identifier doubles as
//! the preference key, so a switch restores whatever was stored under its id
//! and writes `"true"`/`"false"` back on every change. The dark-mode switch
//! is owned by the appearance panel and is not part of this registry.

use super::navigation::Panel;
use crate::error::{Error, Result};
use crate::preferences::{self, PreferenceStore};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Notifier;
use iced::widget::{column, text, toggler, Column, Row, Space};
use iced::{alignment, Element, Length};

pub mod ids {
    pub const AUTOPLAY: &str = "autoplayToggle";
    pub const TWO_FACTOR: &str = "twoFactorToggle";
    pub const EPISODES: &str = "episodeNotifications";
    pub const BOOKMARKS: &str = "bookmarkNotifications";
    pub const RELEASES: &str = "releaseNotifications";
    pub const COMMENTS: &str = "commentNotifications";
}

/// Declaration of a persisted switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub panel: Panel,
    pub default: bool,
}

pub const BINDINGS: [Binding; 6] = [
    Binding {
        id: ids::AUTOPLAY,
        label: "Autoplay next episode",
        description: "Start the next episode automatically",
        panel: Panel::Playback,
        default: true,
    },
    Binding {
        id: ids::TWO_FACTOR,
        label: "Two-factor authentication",
        description: "Require a code in addition to your password",
        panel: Panel::Account,
        default: false,
    },
    Binding {
        id: ids::EPISODES,
        label: "New episodes",
        description: "When a show you follow gets a new episode",
        panel: Panel::Notifications,
        default: true,
    },
    Binding {
        id: ids::BOOKMARKS,
        label: "Bookmarks",
        description: "Reminders about bookmarked titles",
        panel: Panel::Notifications,
        default: true,
    },
    Binding {
        id: ids::RELEASES,
        label: "New releases",
        description: "Weekly digest of new releases",
        panel: Panel::Notifications,
        default: false,
    },
    Binding {
        id: ids::COMMENTS,
        label: "Comment replies",
        description: "When someone replies to your comment",
        panel: Panel::Notifications,
        default: false,
    },
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn ids_are_valid(bindings: &[Binding]) -> bool {
    let mut i = 0;
    while i < bindings.len() {
        if bindings[i].id.is_empty() {
            return false;
        }
        let mut j = i + 1;
        while j < bindings.len() {
            if str_eq(bindings[i].id, bindings[j].id) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(ids_are_valid(&BINDINGS));

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Toggled(&'static str, bool),
}

/// Current state of every declared switch.
#[derive(Debug, Clone)]
pub struct Registry {
    bindings: Vec<Binding>,
    values: Vec<bool>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::from_validated(BINDINGS.to_vec())
    }
}

impl Registry {
    /// Builds a registry, rejecting empty or duplicate identifiers.
    pub fn new(bindings: Vec<Binding>) -> Result<Self> {
        for (index, binding) in bindings.iter().enumerate() {
            if binding.id.is_empty() {
                return Err(Error::Binding(format!(
                    "switch '{}' has no identifier",
                    binding.label
                )));
            }
            if bindings[..index].iter().any(|other| other.id == binding.id) {
                return Err(Error::Binding(format!(
                    "switch identifier '{}' declared twice",
                    binding.id
                )));
            }
        }
        Ok(Self::from_validated(bindings))
    }

    fn from_validated(bindings: Vec<Binding>) -> Self {
        let values = bindings.iter().map(|binding| binding.default).collect();
        Self { bindings, values }
    }

    /// Applies persisted states; missing keys keep their defaults.
    pub fn restore(&mut self, store: &dyn PreferenceStore) {
        for (binding, value) in self.bindings.iter().zip(self.values.iter_mut()) {
            if let Some(saved) = preferences::get_bool(store, binding.id) {
                *value = saved;
            }
        }
    }

    pub fn update(
        &mut self,
        message: Message,
        store: &mut dyn PreferenceStore,
        notifier: &mut dyn Notifier,
    ) {
        let Message::Toggled(id, checked) = message;
        let Some(index) = self.index_of(id) else {
            log::warn!("Ignoring change of undeclared switch '{id}'");
            return;
        };

        self.values[index] = checked;
        preferences::persist(store, id, if checked { "true" } else { "false" });

        if id == ids::TWO_FACTOR {
            if checked {
                notifier.success("Two-factor authentication enabled");
            } else {
                notifier.warning("Two-factor authentication disabled");
            }
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.bindings.iter().position(|binding| binding.id == id)
    }

    /// State of the switch `id`, or `None` when undeclared.
    #[must_use]
    pub fn value(&self, id: &str) -> Option<bool> {
        self.index_of(id).map(|index| self.values[index])
    }

    /// State of `id`, `false` when undeclared.
    #[must_use]
    pub fn is_on(&self, id: &str) -> bool {
        self.value(id).unwrap_or(false)
    }

    /// Switch rows belonging to `panel`.
    pub fn view(&self, panel: Panel) -> Element<'_, Message> {
        self.bindings
            .iter()
            .zip(self.values.iter())
            .filter(|(binding, _)| binding.panel == panel)
            .fold(
                Column::new().spacing(spacing::MD),
                |column_acc, (binding, value)| {
                    let id = binding.id;
                    column_acc.push(
                        Row::new()
                            .align_y(alignment::Vertical::Center)
                            .push(
                                column![
                                    text(binding.label).size(typography::BODY),
                                    text(binding.description).size(typography::CAPTION),
                                ]
                                .spacing(spacing::XXS),
                            )
                            .push(Space::new().width(Length::Fill))
                            .push(
                                toggler(*value)
                                    .on_toggle(move |checked| Message::Toggled(id, checked))
                                    .size(20.0),
                            ),
                    )
                },
            )
            .into()
    }
}
