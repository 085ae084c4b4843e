//! Summary counts over a parsed export.

use serde::Serialize;

use crate::Message;
use crate::message::AttachmentKind;

/// Counts describing a list of parsed messages.
///
/// ```
/// use tgarchive::Message;
/// use tgarchive::core::ExportStats;
///
/// let messages = vec![
///     Message::service("message-1", "3 June 2023"),
///     Message::new("message1", "Alice").with_outgoing(true).with_text("hi"),
///     Message::new("message2", "Bob").with_text("hey").with_reply_to("1"),
/// ];
///
/// let stats = ExportStats::from_messages(&messages);
/// assert_eq!(stats.total, 3);
/// assert_eq!(stats.regular(), 2);
/// assert_eq!(stats.replies, 1);
/// assert!((stats.outgoing_ratio() - 50.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportStats {
    pub total: usize,
    pub service: usize,
    pub outgoing: usize,
    pub edited: usize,
    pub replies: usize,
    pub with_reactions: usize,
    pub media_only: usize,
    pub photos: usize,
    pub videos: usize,
    pub voice_messages: usize,
    pub stickers: usize,
    pub animated_stickers: usize,
    pub documents: usize,
}

impl ExportStats {
    pub fn from_messages(messages: &[Message]) -> Self {
        messages.iter().fold(Self::default(), |mut stats, msg| {
            stats.total += 1;
            if msg.is_service {
                stats.service += 1;
                return stats;
            }

            stats.outgoing += usize::from(msg.is_outgoing);
            stats.edited += usize::from(msg.edited);
            stats.replies += usize::from(msg.is_reply());
            stats.with_reactions += usize::from(msg.reactions.is_some());
            stats.media_only += usize::from(msg.is_media_only());

            for attachment in msg.attachments() {
                match attachment.kind() {
                    AttachmentKind::Photo => stats.photos += 1,
                    AttachmentKind::Video => stats.videos += 1,
                    AttachmentKind::Voice => stats.voice_messages += 1,
                    AttachmentKind::Sticker => stats.stickers += 1,
                    AttachmentKind::AnimatedSticker => stats.animated_stickers += 1,
                    AttachmentKind::Document => stats.documents += 1,
                }
            }
            stats
        })
    }

    /// Number of non-service messages.
    pub fn regular(&self) -> usize {
        self.total - self.service
    }

    /// Total attachments across all kinds.
    pub fn attachments(&self) -> usize {
        self.photos
            + self.videos
            + self.voice_messages
            + self.stickers
            + self.animated_stickers
            + self.documents
    }

    /// Share of regular messages sent by the archive owner, in percent.
    pub fn outgoing_ratio(&self) -> f64 {
        let regular = self.regular();
        if regular == 0 {
            return 0.0;
        }
        self.outgoing as f64 / regular as f64 * 100.0
    }
}
