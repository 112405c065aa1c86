// SPDX-License-Identifier: MPL-2.0
//! Playback panel: subtitle size slider, video quality and subtitle language.

use super::profile::labeled;
use crate::preferences::{self, keys, PreferenceStore};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Notifier;
use iced::widget::{column, pick_list, slider, text, Row};
use iced::{alignment, Element, Length};
use std::fmt;

pub const MIN_SUBTITLE_SIZE: u16 = 12;
pub const MAX_SUBTITLE_SIZE: u16 = 32;
pub const DEFAULT_SUBTITLE_SIZE: u16 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoQuality {
    #[default]
    Auto,
    FullHd,
    Hd,
    Sd,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 4] = [
        VideoQuality::Auto,
        VideoQuality::FullHd,
        VideoQuality::Hd,
        VideoQuality::Sd,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VideoQuality::Auto => "auto",
            VideoQuality::FullHd => "1080p",
            VideoQuality::Hd => "720p",
            VideoQuality::Sd => "480p",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|quality| quality.as_str() == value)
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoQuality::Auto => f.write_str("Auto"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitleLanguage {
    #[default]
    English,
    Japanese,
    Spanish,
    French,
    German,
}

impl SubtitleLanguage {
    pub const ALL: [SubtitleLanguage; 5] = [
        SubtitleLanguage::English,
        SubtitleLanguage::Japanese,
        SubtitleLanguage::Spanish,
        SubtitleLanguage::French,
        SubtitleLanguage::German,
    ];

    /// Code written to the preference store.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            SubtitleLanguage::English => "en",
            SubtitleLanguage::Japanese => "jp",
            SubtitleLanguage::Spanish => "es",
            SubtitleLanguage::French => "fr",
            SubtitleLanguage::German => "de",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SubtitleLanguage::English => "English",
            SubtitleLanguage::Japanese => "Japanese",
            SubtitleLanguage::Spanish => "Spanish",
            SubtitleLanguage::French => "French",
            SubtitleLanguage::German => "German",
        }
    }

    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for SubtitleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Continuous drag; only the label follows.
    SubtitleSizeChanged(u16),
    /// Drag finished; the value is persisted.
    SubtitleSizeReleased,
    QualitySelected(VideoQuality),
    LanguageSelected(SubtitleLanguage),
}

#[derive(Debug, Clone)]
pub struct Playback {
    subtitle_size: u16,
    quality: VideoQuality,
    language: SubtitleLanguage,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            subtitle_size: DEFAULT_SUBTITLE_SIZE,
            quality: VideoQuality::default(),
            language: SubtitleLanguage::default(),
        }
    }
}

impl Playback {
    pub fn restore(store: &dyn PreferenceStore) -> Self {
        let mut playback = Self::default();

        if let Some(value) = store.get(keys::SUBTITLE_SIZE) {
            match parse_size(&value) {
                Some(size) => playback.subtitle_size = size,
                None => log::warn!("Ignoring malformed persisted subtitle size '{value}'"),
            }
        }
        if let Some(value) = store.get(keys::VIDEO_QUALITY) {
            match VideoQuality::parse(&value) {
                Some(quality) => playback.quality = quality,
                None => log::warn!("Ignoring unknown persisted video quality '{value}'"),
            }
        }
        if let Some(value) = store.get(keys::SUBTITLE_LANG) {
            match SubtitleLanguage::parse(&value) {
                Some(language) => playback.language = language,
                None => log::warn!("Ignoring unknown persisted subtitle language '{value}'"),
            }
        }

        playback
    }

    pub fn update(
        &mut self,
        message: Message,
        store: &mut dyn PreferenceStore,
        notifier: &mut dyn Notifier,
    ) {
        match message {
            Message::SubtitleSizeChanged(size) => {
                self.subtitle_size = size.clamp(MIN_SUBTITLE_SIZE, MAX_SUBTITLE_SIZE);
            }
            Message::SubtitleSizeReleased => {
                preferences::persist(store, keys::SUBTITLE_SIZE, &self.subtitle_size.to_string());
                notifier.success("Subtitle size updated");
            }
            Message::QualitySelected(quality) => {
                self.quality = quality;
                preferences::persist(store, keys::VIDEO_QUALITY, quality.as_str());
                notifier.success(&format!("Video quality set to {}", quality.as_str()));
            }
            Message::LanguageSelected(language) => {
                self.language = language;
                preferences::persist(store, keys::SUBTITLE_LANG, language.code());
                notifier.success(&format!("Subtitle language set to {}", language.name()));
            }
        }
    }

    #[must_use]
    pub fn subtitle_size(&self) -> u16 {
        self.subtitle_size
    }

    /// Live label next to the slider.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{}px", self.subtitle_size)
    }

    #[must_use]
    pub fn quality(&self) -> VideoQuality {
        self.quality
    }

    #[must_use]
    pub fn language(&self) -> SubtitleLanguage {
        self.language
    }

    pub fn view(&self) -> Element<'_, Message> {
        let size_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                slider(
                    MIN_SUBTITLE_SIZE..=MAX_SUBTITLE_SIZE,
                    self.subtitle_size,
                    Message::SubtitleSizeChanged,
                )
                .on_release(Message::SubtitleSizeReleased)
                .width(Length::Fill),
            )
            .push(text(self.size_label()).size(typography::BODY));

        let selects = Row::new()
            .spacing(spacing::MD)
            .push(labeled(
                "Video quality",
                pick_list(VideoQuality::ALL, Some(self.quality), Message::QualitySelected)
                    .width(Length::Fill),
            ))
            .push(labeled(
                "Subtitle language",
                pick_list(
                    SubtitleLanguage::ALL,
                    Some(self.language),
                    Message::LanguageSelected,
                )
                .width(Length::Fill),
            ));

        column![selects, labeled("Subtitle size", size_row)]
            .spacing(spacing::MD)
            .into()
    }
}

/// Parses a stored size, clamping it into the slider range.
fn parse_size(value: &str) -> Option<u16> {
    let size = value.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let clamped = size
        .round()
        .clamp(f64::from(MIN_SUBTITLE_SIZE), f64::from(MAX_SUBTITLE_SIZE));
    Some(clamped as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;
    use crate::ui::notifications::{RecordingNotifier, Severity};

    #[test]
    fn restores_persisted_size_and_clamps_out_of_range() {
        let store: MemoryStore = [(keys::SUBTITLE_SIZE, "24")].into_iter().collect();
        assert_eq!(Playback::restore(&store).size_label(), "24px");

        let store: MemoryStore = [(keys::SUBTITLE_SIZE, "90")].into_iter().collect();
        assert_eq!(Playback::restore(&store).subtitle_size(), MAX_SUBTITLE_SIZE);

        let store: MemoryStore = [(keys::SUBTITLE_SIZE, "3")].into_iter().collect();
        assert_eq!(Playback::restore(&store).subtitle_size(), MIN_SUBTITLE_SIZE);

        let store: MemoryStore = [(keys::SUBTITLE_SIZE, "big")].into_iter().collect();
        assert_eq!(Playback::restore(&store).subtitle_size(), DEFAULT_SUBTITLE_SIZE);
    }

    #[test]
    fn unknown_quality_and_language_fall_back_to_defaults() {
        let store: MemoryStore = [(keys::VIDEO_QUALITY, "4k"), (keys::SUBTITLE_LANG, "xx")]
            .into_iter()
            .collect();
        let playback = Playback::restore(&store);
        assert_eq!(playback.quality(), Playback::default().quality());
        assert_eq!(playback.language(), Playback::default().language());
    }

    #[test]
    fn drag_updates_label_and_release_persists() {
        let mut playback = Playback::default();
        let mut store = MemoryStore::new();
        let mut notifier = RecordingNotifier::default();

        playback.update(Message::SubtitleSizeChanged(26), &mut store, &mut notifier);
        assert_eq!(playback.size_label(), "26px");
        assert_eq!(store.get(keys::SUBTITLE_SIZE), None);
        assert!(notifier.messages.is_empty());

        playback.update(Message::SubtitleSizeReleased, &mut store, &mut notifier);
        assert_eq!(store.get(keys::SUBTITLE_SIZE).as_deref(), Some("26"));
        assert_eq!(notifier.last(), Some(("Subtitle size updated", Severity::Success)));
    }

    #[test]
    fn selects_persist_and_announce() {
        let mut playback = Playback::default();
        let mut store = MemoryStore::new();
        let mut notifier = RecordingNotifier::default();

        playback.update(Message::QualitySelected(VideoQuality::Hd), &mut store, &mut notifier);
        assert_eq!(store.get(keys::VIDEO_QUALITY).as_deref(), Some("720p"));
        assert_eq!(notifier.last(), Some(("Video quality set to 720p", Severity::Success)));

        playback.update(
            Message::LanguageSelected(SubtitleLanguage::Japanese),
            &mut store,
            &mut notifier,
        );
        assert_eq!(store.get(keys::SUBTITLE_LANG).as_deref(), Some("jp"));
        assert_eq!(
            notifier.last(),
            Some(("Subtitle language set to Japanese", Severity::Success))
        );

        let restored = Playback::restore(&store);
        assert_eq!(restored.quality(), VideoQuality::Hd);
        assert_eq!(restored.language(), SubtitleLanguage::Japanese);
    }

    #[test]
    fn unknown_select_values_keep_defaults() {
        let store: MemoryStore = [(keys::VIDEO_QUALITY, "4k"), (keys::SUBTITLE_LANG, "xx")]
            .into_iter()
            .collect();
        let playback = Playback::restore(&store);
        assert_eq!(playback.quality(), VideoQuality::Auto);
        assert_eq!(playback.language(), SubtitleLanguage::English);
    }
}
