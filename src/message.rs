//! Message records produced from a Telegram HTML export.
//!
//! A [`Message`] is one entry of an exported chat history: either a regular
//! message (sender, text, attachments, reply, reactions, edit marker) or a
//! service notice such as a date separator, which only carries `text`.
//!
//! Optional fields use `Option` to keep "absent" distinct from an empty
//! value. Serialization omits absent fields and deserialization restores
//! them as `None`, so that distinction survives a JSON round trip.
//!
//! # Example
//!
//! ```
//! use tgarchive::{Message, PhotoAttachment};
//!
//! let msg = Message::new("message42", "Alice")
//!     .with_date("03.06.2023 14:22:05 UTC+03:00")
//!     .with_photo(PhotoAttachment::new("photos/photo_1.jpg"));
//!
//! assert!(msg.is_media_only());
//! assert_eq!(msg.attachments().count(), 1);
//! ```

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Date format of the exporter's machine-readable `title` attributes,
/// e.g. `03.06.2023 14:22:05 UTC+03:00`.
const EXPORT_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S UTC%:z";

/// Older exports omit the offset.
const EXPORT_DATE_FORMAT_NAIVE: &str = "%d.%m.%Y %H:%M:%S";

/// One exported chat entry.
///
/// | Field | Description |
/// |-------|-------------|
/// | `id` | Exporter element id, unique within one export |
/// | `chat_id` | Assigned by the caller, copied from the parser config |
/// | `is_service` | System notice; only `id` and `text` are meaningful |
/// | `is_outgoing` | Sender equals the configured self name |
/// | `date` | Raw exporter date, title attribute preferred |
/// | `from` | Sender, inherited from the previous message when omitted |
/// | `text` | Plain text, absent for media-only messages |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// Exporter element identifier (e.g. `message1234`).
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub chat_id: String,

    #[serde(default)]
    pub is_service: bool,

    #[serde(default)]
    pub is_outgoing: bool,

    /// Raw display date. Empty for service messages.
    #[serde(default)]
    pub date: String,

    /// Sender display name. Empty for service messages.
    #[serde(default)]
    pub from: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoAttachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoAttachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_message: Option<VoiceAttachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<StickerAttachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated_sticker: Option<AnimatedStickerAttachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentAttachment>,

    /// Bare id of the message this one replies to, as written in the
    /// exporter's `GoToMessage(<id>)` affordance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<String>,

    /// Original sender of a forwarded message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forwarded_from: Option<String>,

    /// Absent when the message has no reaction markers at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,

    #[serde(default)]
    pub edited: bool,

    /// Present iff `edited`; empty when the marker has no title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_date: Option<String>,
}

impl Message {
    /// Creates a regular message with only an id and a sender.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tgarchive::Message;
    ///
    /// let msg = Message::new("message1", "Alice").with_text("Hello!");
    /// assert_eq!(msg.from, "Alice");
    /// assert_eq!(msg.text.as_deref(), Some("Hello!"));
    /// assert!(!msg.is_service);
    /// ```
    pub fn new(id: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            ..Self::default()
        }
    }

    /// Creates a service message (date separator, join/leave notice).
    ///
    /// Service messages carry nothing but their id and text.
    ///
    /// ```rust
    /// use tgarchive::Message;
    ///
    /// let msg = Message::service("message-1", "3 June 2023");
    /// assert!(msg.is_service);
    /// assert_eq!(msg.from, "");
    /// assert_eq!(msg.date, "");
    /// ```
    pub fn service(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_service: true,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    #[must_use]
    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = chat_id.into();
        self
    }

    #[must_use]
    pub fn with_outgoing(mut self, outgoing: bool) -> Self {
        self.is_outgoing = outgoing;
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_photo(mut self, photo: PhotoAttachment) -> Self {
        self.photo = Some(photo);
        self
    }

    #[must_use]
    pub fn with_video(mut self, video: VideoAttachment) -> Self {
        self.video = Some(video);
        self
    }

    #[must_use]
    pub fn with_voice_message(mut self, voice: VoiceAttachment) -> Self {
        self.voice_message = Some(voice);
        self
    }

    #[must_use]
    pub fn with_sticker(mut self, sticker: StickerAttachment) -> Self {
        self.sticker = Some(sticker);
        self
    }

    #[must_use]
    pub fn with_animated_sticker(mut self, sticker: AnimatedStickerAttachment) -> Self {
        self.animated_sticker = Some(sticker);
        self
    }

    #[must_use]
    pub fn with_document(mut self, document: DocumentAttachment) -> Self {
        self.document = Some(document);
        self
    }

    #[must_use]
    pub fn with_reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to_message_id = Some(message_id.into());
        self
    }

    #[must_use]
    pub fn with_forwarded_from(mut self, sender: impl Into<String>) -> Self {
        self.forwarded_from = Some(sender.into());
        self
    }

    #[must_use]
    pub fn with_reactions(mut self, reactions: Vec<Reaction>) -> Self {
        self.reactions = Some(reactions);
        self
    }

    /// Marks the message as edited at `date`.
    ///
    /// Sets `edited` and `edited_date` together so they cannot disagree.
    #[must_use]
    pub fn with_edited(mut self, date: impl Into<String>) -> Self {
        self.edited = true;
        self.edited_date = Some(date.into());
        self
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Iterates over the populated attachments in a fixed order:
    /// photo, video, voice message, sticker, animated sticker, document.
    pub fn attachments(&self) -> impl Iterator<Item = Attachment<'_>> {
        [
            self.photo.as_ref().map(Attachment::Photo),
            self.video.as_ref().map(Attachment::Video),
            self.voice_message.as_ref().map(Attachment::Voice),
            self.sticker.as_ref().map(Attachment::Sticker),
            self.animated_sticker.as_ref().map(Attachment::AnimatedSticker),
            self.document.as_ref().map(Attachment::Document),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns the first populated attachment, if any.
    pub fn attachment(&self) -> Option<Attachment<'_>> {
        self.attachments().next()
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment().is_some()
    }

    /// Returns `true` for a regular message that has an attachment and no text.
    pub fn is_media_only(&self) -> bool {
        !self.is_service && self.text.is_none() && self.has_attachment()
    }

    pub fn is_reply(&self) -> bool {
        self.reply_to_message_id.is_some()
    }

    /// Parses [`date`](Self::date) as an exporter timestamp.
    ///
    /// Returns `None` for service messages and for dates that only carry
    /// the visible `HH:MM` text.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        parse_export_date(&self.date)
    }

    /// Parses [`edited_date`](Self::edited_date) as an exporter timestamp.
    pub fn edited_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.edited_date.as_deref().and_then(parse_export_date)
    }
}

/// Parses an exporter date such as `03.06.2023 14:22:05 UTC+03:00`.
///
/// Dates without an offset are taken as UTC.
///
/// ```
/// use tgarchive::message::parse_export_date;
///
/// let ts = parse_export_date("03.06.2023 14:22:05 UTC+03:00").unwrap();
/// assert_eq!(ts.offset().local_minus_utc(), 3 * 3600);
/// assert!(parse_export_date("14:22").is_none());
/// ```
pub fn parse_export_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_str(raw, EXPORT_DATE_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, EXPORT_DATE_FORMAT_NAIVE)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

/// A single reaction shown under a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    /// Defaults to 1 when the exporter's count is missing or not a number.
    pub count: u32,
    /// Title of the reacting user's picture; may be empty.
    #[serde(default)]
    pub from: String,
}

impl Reaction {
    pub fn new(emoji: impl Into<String>, count: u32, from: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            count,
            from: from.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// The HTML export never states photo sizes; kept for model parity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl PhotoAttachment {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideoAttachment {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_path: Option<String>,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl VideoAttachment {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoiceAttachment {
    pub path: String,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl VoiceAttachment {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StickerAttachment {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimatedStickerAttachment {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentAttachment {
    pub path: String,
    /// Bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Borrowed view over one populated attachment of a [`Message`].
///
/// Lets a renderer dispatch on the attachment variant without checking
/// six optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment<'a> {
    Photo(&'a PhotoAttachment),
    Video(&'a VideoAttachment),
    Voice(&'a VoiceAttachment),
    Sticker(&'a StickerAttachment),
    AnimatedSticker(&'a AnimatedStickerAttachment),
    Document(&'a DocumentAttachment),
}

impl Attachment<'_> {
    pub fn kind(&self) -> AttachmentKind {
        match self {
            Attachment::Photo(_) => AttachmentKind::Photo,
            Attachment::Video(_) => AttachmentKind::Video,
            Attachment::Voice(_) => AttachmentKind::Voice,
            Attachment::Sticker(_) => AttachmentKind::Sticker,
            Attachment::AnimatedSticker(_) => AttachmentKind::AnimatedSticker,
            Attachment::Document(_) => AttachmentKind::Document,
        }
    }

    /// Path of the attached file, relative to the export directory.
    pub fn path(&self) -> &str {
        match self {
            Attachment::Photo(a) => &a.path,
            Attachment::Video(a) => &a.path,
            Attachment::Voice(a) => &a.path,
            Attachment::Sticker(a) => &a.path,
            Attachment::AnimatedSticker(a) => &a.path,
            Attachment::Document(a) => &a.path,
        }
    }
}

/// Attachment variant without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Photo,
    Video,
    Voice,
    Sticker,
    AnimatedSticker,
    Document,
}

impl AttachmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentKind::Photo => "photo",
            AttachmentKind::Video => "video",
            AttachmentKind::Voice => "voice",
            AttachmentKind::Sticker => "sticker",
            AttachmentKind::AnimatedSticker => "animated_sticker",
            AttachmentKind::Document => "document",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
