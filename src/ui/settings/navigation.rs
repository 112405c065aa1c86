// SPDX-License-Identifier: MPL-2.0
//! Sidebar navigation between settings panels.
//!
//! Each entry declares a target name; the panel it shows is the one whose
//! section id is `<target>-section`. An entry whose target has no panel still
//! becomes active, but leaves no panel shown.

use crate::error::{Error, Result};
use crate::ui::icons;

/// Content region shown for a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Profile,
    Account,
    Appearance,
    Playback,
    Notifications,
    Privacy,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Profile,
        Panel::Account,
        Panel::Appearance,
        Panel::Playback,
        Panel::Notifications,
        Panel::Privacy,
    ];

    #[must_use]
    pub fn section_id(self) -> &'static str {
        match self {
            Panel::Profile => "profile-section",
            Panel::Account => "account-section",
            Panel::Appearance => "appearance-section",
            Panel::Playback => "playback-section",
            Panel::Notifications => "notifications-section",
            Panel::Privacy => "privacy-section",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Panel::Profile => "Profile",
            Panel::Account => "Account & Security",
            Panel::Appearance => "Appearance",
            Panel::Playback => "Video Player",
            Panel::Notifications => "Notifications",
            Panel::Privacy => "Privacy & Data",
        }
    }

    /// Panels carrying a save button.
    #[must_use]
    pub fn has_save_button(self) -> bool {
        matches!(self, Panel::Profile | Panel::Playback | Panel::Notifications)
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub glyph: &'static str,
    /// Target name; the panel id is derived as `<target>-section`.
    pub target: &'static str,
}

impl NavEntry {
    #[must_use]
    pub fn section_id(&self) -> String {
        format!("{}-section", self.target)
    }
}

pub const ENTRIES: [NavEntry; 6] = [
    NavEntry {
        label: "Profile",
        glyph: icons::USER,
        target: "profile",
    },
    NavEntry {
        label: "Account",
        glyph: icons::LOCK,
        target: "account",
    },
    NavEntry {
        label: "Appearance",
        glyph: icons::PALETTE,
        target: "appearance",
    },
    NavEntry {
        label: "Video Player",
        glyph: icons::PLAY,
        target: "playback",
    },
    NavEntry {
        label: "Notifications",
        glyph: icons::BELL,
        target: "notifications",
    },
    NavEntry {
        label: "Privacy",
        glyph: icons::GEAR,
        target: "privacy",
    },
];

/// Active entry and panel of the sidebar.
#[derive(Debug, Clone)]
pub struct Navigation {
    entries: Vec<NavEntry>,
    panels: Vec<Panel>,
    active_entry: usize,
    active_panel: Option<Panel>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::from_parts(ENTRIES.to_vec(), Panel::ALL.to_vec())
    }
}

impl Navigation {
    /// Builds a navigation over `entries` and the registered `panels`.
    ///
    /// Fails when there are no entries or two panels share a section id.
    pub fn new(entries: Vec<NavEntry>, panels: Vec<Panel>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Binding("navigation needs at least one entry".into()));
        }
        for (index, panel) in panels.iter().enumerate() {
            if panels[..index].contains(panel) {
                return Err(Error::Binding(format!(
                    "panel '{}' registered twice",
                    panel.section_id()
                )));
            }
        }
        Ok(Self::from_parts(entries, panels))
    }

    fn from_parts(entries: Vec<NavEntry>, panels: Vec<Panel>) -> Self {
        let mut navigation = Self {
            entries,
            panels,
            active_entry: 0,
            active_panel: None,
        };
        navigation.active_panel = navigation.panel_for(0);
        navigation
    }

    fn panel_for(&self, index: usize) -> Option<Panel> {
        let section_id = self.entries.get(index)?.section_id();
        self.panels
            .iter()
            .copied()
            .find(|panel| panel.section_id() == section_id)
    }

    /// Activates entry `index`. Returns `false` for an out-of-range index,
    /// which leaves the state untouched.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            log::debug!("ignoring navigation to missing entry {index}");
            return false;
        }
        self.active_entry = index;
        self.active_panel = self.panel_for(index);
        log::debug!(
            "navigated to '{}' (panel: {:?})",
            self.entries[index].target,
            self.active_panel
        );
        true
    }

    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    #[must_use]
    pub fn active_entry(&self) -> usize {
        self.active_entry
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active_entry == index
    }

    #[must_use]
    pub fn active_panel(&self) -> Option<Panel> {
        self.active_panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_entry_has_a_panel() {
        let mut navigation = Navigation::default();
        for index in 0..ENTRIES.len() {
            assert!(navigation.activate(index));
            let panel = navigation.active_panel().expect("panel exists");
            assert_eq!(panel.section_id(), ENTRIES[index].section_id());
        }
    }

    #[test]
    fn exactly_one_entry_is_active() {
        let mut navigation = Navigation::default();
        navigation.activate(3);
        let active: Vec<usize> = (0..ENTRIES.len())
            .filter(|&i| navigation.is_active(i))
            .collect();
        assert_eq!(active, vec![3]);
        assert_eq!(navigation.active_panel(), Some(Panel::Playback));
    }

    #[test]
    fn entry_without_panel_activates_with_no_panel() {
        let mut entries = ENTRIES.to_vec();
        entries.push(NavEntry {
            label: "Billing",
            glyph: icons::GEAR,
            target: "billing",
        });
        let mut navigation = Navigation::new(entries, Panel::ALL.to_vec()).unwrap();

        assert!(navigation.activate(6));
        assert_eq!(navigation.active_entry(), 6);
        assert_eq!(navigation.active_panel(), None);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut navigation = Navigation::default();
        navigation.activate(2);
        assert!(!navigation.activate(42));
        assert_eq!(navigation.active_entry(), 2);
        assert_eq!(navigation.active_panel(), Some(Panel::Appearance));
    }

    #[test]
    fn construction_validates_registry() {
        assert!(matches!(
            Navigation::new(Vec::new(), Panel::ALL.to_vec()),
            Err(Error::Binding(_))
        ));
        assert!(matches!(
            Navigation::new(ENTRIES.to_vec(), vec![Panel::Profile, Panel::Profile]),
            Err(Error::Binding(_))
        ));
    }

    #[test]
    fn save_buttons_live_on_three_panels() {
        let with_save: Vec<Panel> = Panel::ALL
            .into_iter()
            .filter(|panel| panel.has_save_button())
            .collect();
        assert_eq!(
            with_save,
            vec![Panel::Profile, Panel::Playback, Panel::Notifications]
        );
    }
}
