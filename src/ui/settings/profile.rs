// SPDX-License-Identifier: MPL-2.0
//! Profile panel: avatar preview and identity fields.
//!
//! Picking an avatar goes through three steps. The app opens a file dialog
//! and inspects the chosen file ([`SelectedFile::inspect`]), this component
//! validates the declared type and size, and the app decodes the accepted
//! file off the update loop ([`decode_preview`]). Only a successful decode
//! replaces the preview.

use super::ViewContext;
use crate::error::{Error, Result};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::Notifier;
use crate::ui::styles;
use crate::ui::styles::input::Cue;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, text, text_input, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Minimum username length before the warning cue clears.
pub const MIN_USERNAME_CHARS: usize = 3;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A file chosen in the picker, described before reading its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// MIME type derived from the file extension, if recognized.
    pub declared_type: Option<String>,
    pub size: u64,
}

impl SelectedFile {
    /// Reads the file size and derives the declared type from the extension.
    pub fn inspect(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let declared_type = image_rs::ImageFormat::from_path(path)
            .ok()
            .map(|format| format.to_mime_type().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            declared_type,
            size: metadata.len(),
        })
    }
}

/// Why a selected file was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotAnImage,
    TooLarge,
}

impl Rejection {
    /// User-facing text; `max_bytes` is the limit the file was checked against.
    #[must_use]
    pub fn message(self, max_bytes: u64) -> String {
        match self {
            Rejection::NotAnImage => "Please select a valid image file".to_string(),
            Rejection::TooLarge => {
                format!("Image size should be less than {}", format_size(max_bytes))
            }
        }
    }
}

/// Short size label: `5MB`, `1.5MB`, `512KB`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;

    if bytes >= MIB {
        if bytes % MIB == 0 {
            format!("{}MB", bytes / MIB)
        } else {
            format!("{:.1}MB", bytes as f64 / MIB as f64)
        }
    } else if bytes >= KIB {
        format!("{}KB", bytes / KIB)
    } else {
        format!("{bytes} bytes")
    }
}

/// Checks the declared type first, then the size.
pub fn validate(file: &SelectedFile, max_bytes: u64) -> std::result::Result<(), Rejection> {
    let is_image = file
        .declared_type
        .as_deref()
        .is_some_and(|mime| mime.starts_with("image/"));
    if !is_image {
        return Err(Rejection::NotAnImage);
    }
    if file.size > max_bytes {
        return Err(Rejection::TooLarge);
    }
    Ok(())
}

/// Decoded avatar pixels ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// Decodes `path` on the blocking pool.
pub async fn decode_preview(path: PathBuf) -> Result<DecodedImage> {
    tokio::task::spawn_blocking(move || decode_file(&path))
        .await
        .map_err(|err| Error::Image(err.to_string()))?
}

fn decode_file(path: &Path) -> Result<DecodedImage> {
    let bytes = std::fs::read(path)?;
    let rgba = image_rs::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        handle: Handle::from_rgba(width, height, rgba.into_vec()),
        width,
        height,
    })
}

/// Displayed avatar with the instant it was swapped in.
#[derive(Debug, Clone)]
pub struct Preview {
    pub image: DecodedImage,
    pub shown_at: Instant,
}

impl Preview {
    /// Fade-in opacity at `now`, from 0 to 1 over `fade`.
    #[must_use]
    pub fn opacity(&self, now: Instant, fade: Duration) -> f32 {
        if fade.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        (elapsed.as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant, fade: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) < fade
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    AvatarPressed,
    /// Picker result; `Ok(None)` when the dialog was cancelled.
    FileChosen(Result<Option<SelectedFile>>),
    PreviewDecoded(Result<DecodedImage>),
    UsernameChanged(String),
    EmailChanged(String),
    EmailSubmitted,
    BioChanged(String),
}

/// Work the app must run on behalf of the profile panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    PickFile,
    Decode(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct Profile {
    username: String,
    email: String,
    bio: String,
    username_cue: Cue,
    email_cue: Cue,
    preview: Option<Preview>,
}

impl Profile {
    pub fn update(
        &mut self,
        message: Message,
        notifier: &mut dyn Notifier,
        max_image_bytes: u64,
        now: Instant,
    ) -> Event {
        match message {
            Message::AvatarPressed => Event::PickFile,
            Message::FileChosen(Ok(None)) => Event::None,
            Message::FileChosen(Ok(Some(file))) => match validate(&file, max_image_bytes) {
                Ok(()) => {
                    log::debug!("decoding profile image {}", file.path.display());
                    Event::Decode(file.path)
                }
                Err(rejection) => {
                    notifier.error(&rejection.message(max_image_bytes));
                    Event::None
                }
            },
            Message::FileChosen(Err(err)) => {
                log::warn!("Failed to inspect selected image: {err}");
                notifier.error(&Rejection::NotAnImage.message(max_image_bytes));
                Event::None
            }
            Message::PreviewDecoded(Ok(image)) => {
                self.preview = Some(Preview {
                    image,
                    shown_at: now,
                });
                Event::None
            }
            Message::PreviewDecoded(Err(err)) => {
                log::warn!("Failed to decode profile image: {err}");
                notifier.error("Profile image could not be loaded");
                Event::None
            }
            Message::UsernameChanged(value) => {
                self.username_cue = username_cue(&value);
                self.username = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::EmailSubmitted => {
                self.email_cue = email_cue(&self.email);
                if self.email_cue == Cue::Danger {
                    notifier.error("Please enter a valid email address");
                }
                Event::None
            }
            Message::BioChanged(value) => {
                self.bio = value;
                Event::None
            }
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn bio(&self) -> &str {
        &self.bio
    }

    #[must_use]
    pub fn username_cue(&self) -> Cue {
        self.username_cue
    }

    #[must_use]
    pub fn email_cue(&self) -> Cue {
        self.email_cue
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn view<'a>(&'a self, ctx: &ViewContext) -> Element<'a, Message> {
        let accent = ctx.accent;

        let avatar_content: Element<'a, Message> = match &self.preview {
            Some(preview) => Image::new(preview.image.handle.clone())
                .width(Length::Fixed(sizing::AVATAR))
                .height(Length::Fixed(sizing::AVATAR))
                .content_fit(ContentFit::Cover)
                .opacity(preview.opacity(ctx.now, ctx.fade_in))
                .into(),
            None => icons::sized(icons::USER, sizing::AVATAR / 2.0).into(),
        };

        let avatar = button(
            Container::new(avatar_content)
                .center(Length::Fixed(sizing::AVATAR))
                .style(styles::container::avatar(accent)),
        )
        .padding(0)
        .style(button::text)
        .on_press(Message::AvatarPressed);

        let avatar_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(avatar)
            .push(
                column![
                    text("Profile photo").size(typography::TITLE_SM),
                    text(format!(
                        "{} Click the photo to upload (max {})",
                        icons::CAMERA,
                        format_size(ctx.max_image_bytes)
                    ))
                        .size(typography::CAPTION),
                ]
                .spacing(spacing::XXS),
            );

        let username = text_input("Username", &self.username)
            .on_input(Message::UsernameChanged)
            .padding(spacing::XS)
            .style(styles::input::field(self.username_cue, accent));

        let email = text_input("Email address", &self.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::EmailSubmitted)
            .padding(spacing::XS)
            .style(styles::input::field(self.email_cue, accent));

        let bio = text_input("Tell us about yourself", &self.bio)
            .on_input(Message::BioChanged)
            .padding(spacing::XS)
            .style(styles::input::field(Cue::Neutral, accent));

        Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::FORM_MAX_WIDTH)
            .push(avatar_row)
            .push(labeled("Username", username))
            .push(labeled("Email", email))
            .push(labeled("Bio", bio))
            .into()
    }
}

/// Caption above a form control.
pub(super) fn labeled<'a, M: 'a>(
    label: &'a str,
    field: impl Into<Element<'a, M>>,
) -> Element<'a, M> {
    let field: Element<'a, M> = field.into();
    container(column![text(label).size(typography::CAPTION), field].spacing(spacing::XXS))
        .width(Length::Fill)
        .into()
}

/// Warning while the username is shorter than [`MIN_USERNAME_CHARS`].
#[must_use]
pub fn username_cue(value: &str) -> Cue {
    if value.chars().count() < MIN_USERNAME_CHARS {
        Cue::Warning
    } else {
        Cue::Neutral
    }
}

/// Danger for a non-empty value that does not look like an address.
#[must_use]
pub fn email_cue(value: &str) -> Cue {
    if !value.is_empty() && !EMAIL_PATTERN.is_match(value) {
        Cue::Danger
    } else {
        Cue::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{RecordingNotifier, Severity};
    use tempfile::tempdir;

    const MAX: u64 = 5 * 1024 * 1024;

    fn file(declared_type: Option<&str>, size: u64) -> SelectedFile {
        SelectedFile {
            path: PathBuf::from("avatar.png"),
            declared_type: declared_type.map(str::to_string),
            size,
        }
    }

    fn tiny_image() -> DecodedImage {
        DecodedImage {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn validation_checks_type_then_size() {
        assert_eq!(validate(&file(Some("image/png"), 2 * 1024 * 1024), MAX), Ok(()));
        assert_eq!(validate(&file(Some("image/png"), MAX), MAX), Ok(()));
        assert_eq!(
            validate(&file(Some("image/png"), 6 * 1024 * 1024), MAX),
            Err(Rejection::TooLarge)
        );
        assert_eq!(
            validate(&file(Some("application/pdf"), 10), MAX),
            Err(Rejection::NotAnImage)
        );
        assert_eq!(
            validate(&file(None, 6 * 1024 * 1024), MAX),
            Err(Rejection::NotAnImage)
        );
    }

    #[test]
    fn oversized_image_is_rejected_and_preview_kept() {
        let mut profile = Profile::default();
        let mut notifier = RecordingNotifier::default();
        let now = Instant::now();
        profile.update(
            Message::PreviewDecoded(Ok(tiny_image())),
            &mut notifier,
            MAX,
            now,
        );

        let event = profile.update(
            Message::FileChosen(Ok(Some(file(Some("image/jpeg"), 6 * 1024 * 1024)))),
            &mut notifier,
            MAX,
            now,
        );

        assert_eq!(event, Event::None);
        assert_eq!(
            notifier.last(),
            Some(("Image size should be less than 5MB", Severity::Error))
        );
        assert_eq!(profile.preview().map(|p| p.shown_at), Some(now));
    }

    #[test]
    fn accepted_image_is_decoded_then_replaces_preview() {
        let mut profile = Profile::default();
        let mut notifier = RecordingNotifier::default();
        let now = Instant::now();

        let event = profile.update(
            Message::FileChosen(Ok(Some(file(Some("image/png"), 2 * 1024 * 1024)))),
            &mut notifier,
            MAX,
            now,
        );
        assert_eq!(event, Event::Decode(PathBuf::from("avatar.png")));
        assert!(profile.preview().is_none());

        profile.update(
            Message::PreviewDecoded(Ok(tiny_image())),
            &mut notifier,
            MAX,
            now,
        );
        assert!(profile.preview().is_some());
        assert!(notifier.messages.is_empty());
    }

    #[test]
    fn rejection_text_follows_configured_limit() {
        let mut profile = Profile::default();
        let mut notifier = RecordingNotifier::default();
        let one_mib = 1024 * 1024;

        profile.update(
            Message::FileChosen(Ok(Some(file(Some("image/png"), 2 * one_mib)))),
            &mut notifier,
            one_mib,
            Instant::now(),
        );
        assert_eq!(
            notifier.last(),
            Some(("Image size should be less than 1MB", Severity::Error))
        );
    }

    #[test]
    fn size_labels() {
        assert_eq!(format_size(5 * 1024 * 1024), "5MB");
        assert_eq!(format_size(1024 * 1024 + 512 * 1024), "1.5MB");
        assert_eq!(format_size(512 * 1024), "512KB");
        assert_eq!(format_size(100), "100 bytes");
    }

    #[test]
    fn failures_after_selection_keep_preview() {
        let mut profile = Profile::default();
        let mut notifier = RecordingNotifier::default();
        let shown_at = Instant::now();
        profile.update(
            Message::PreviewDecoded(Ok(tiny_image())),
            &mut notifier,
            MAX,
            shown_at,
        );

        let later = shown_at + Duration::from_secs(1);
        let event = profile.update(
            Message::PreviewDecoded(Err(Error::Image("truncated file".into()))),
            &mut notifier,
            MAX,
            later,
        );
        assert_eq!(event, Event::None);
        assert_eq!(
            notifier.last(),
            Some(("Profile image could not be loaded", Severity::Error))
        );
        assert_eq!(profile.preview().map(|p| p.shown_at), Some(shown_at));

        let event = profile.update(
            Message::FileChosen(Err(Error::Io("permission denied".into()))),
            &mut notifier,
            MAX,
            later,
        );
        assert_eq!(event, Event::None);
        assert_eq!(
            notifier.last(),
            Some(("Please select a valid image file", Severity::Error))
        );
        assert_eq!(profile.preview().map(|p| p.shown_at), Some(shown_at));
        assert_eq!(notifier.messages.len(), 2);
    }

    #[test]
    fn cancelled_picker_is_a_no_op() {
        let mut profile = Profile::default();
        let mut notifier = RecordingNotifier::default();
        let event = profile.update(
            Message::FileChosen(Ok(None)),
            &mut notifier,
            MAX,
            Instant::now(),
        );
        assert_eq!(event, Event::None);
        assert!(notifier.messages.is_empty());
    }

    #[test]
    fn preview_fades_in_over_duration() {
        let start = Instant::now();
        let preview = Preview {
            image: tiny_image(),
            shown_at: start,
        };
        let fade = Duration::from_millis(300);

        assert_eq!(preview.opacity(start, fade), 0.0);
        assert!((preview.opacity(start + Duration::from_millis(150), fade) - 0.5).abs() < 0.01);
        assert_eq!(preview.opacity(start + fade, fade), 1.0);
        assert!(!preview.is_fading(start + fade, fade));
        assert_eq!(preview.opacity(start, Duration::ZERO), 1.0);
    }

    #[test]
    fn short_username_shows_warning() {
        assert_eq!(username_cue(""), Cue::Warning);
        assert_eq!(username_cue("ab"), Cue::Warning);
        assert_eq!(username_cue("abc"), Cue::Neutral);
        assert_eq!(username_cue("zoë"), Cue::Neutral);
    }

    #[test]
    fn email_is_validated_on_submit() {
        let mut profile = Profile::default();
        let mut notifier = RecordingNotifier::default();
        let now = Instant::now();

        profile.update(Message::EmailChanged("not-an-email".into()), &mut notifier, MAX, now);
        assert_eq!(profile.email_cue(), Cue::Neutral);

        profile.update(Message::EmailSubmitted, &mut notifier, MAX, now);
        assert_eq!(profile.email_cue(), Cue::Danger);
        assert_eq!(
            notifier.last(),
            Some(("Please enter a valid email address", Severity::Error))
        );

        profile.update(Message::EmailChanged("kai@example.com".into()), &mut notifier, MAX, now);
        profile.update(Message::EmailSubmitted, &mut notifier, MAX, now);
        assert_eq!(profile.email_cue(), Cue::Neutral);

        profile.update(Message::EmailChanged(String::new()), &mut notifier, MAX, now);
        profile.update(Message::EmailSubmitted, &mut notifier, MAX, now);
        assert_eq!(profile.email_cue(), Cue::Neutral);
        assert_eq!(notifier.messages.len(), 1);
    }

    #[test]
    fn inspect_derives_type_from_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let png = dir.path().join("me.png");
        let txt = dir.path().join("notes.txt");
        std::fs::write(&png, [0u8; 16]).unwrap();
        std::fs::write(&txt, b"hello").unwrap();

        let png = SelectedFile::inspect(&png).unwrap();
        assert_eq!(png.declared_type.as_deref(), Some("image/png"));
        assert_eq!(png.size, 16);

        let txt = SelectedFile::inspect(&txt).unwrap();
        assert_eq!(txt.declared_type, None);
    }

    #[tokio::test]
    async fn decodes_real_png() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("avatar.png");
        image_rs::RgbaImage::from_pixel(4, 3, image_rs::Rgba([0, 217, 255, 255]))
            .save(&path)
            .expect("write png");

        let decoded = decode_preview(path).await.expect("decode succeeds");
        assert_eq!((decoded.width, decoded.height), (4, 3));
    }

    #[tokio::test]
    async fn undecodable_file_is_an_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        assert!(decode_preview(path).await.is_err());
    }
}
