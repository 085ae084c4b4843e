//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter, requires `csv-output`
//! - [`write_json`] / [`to_json`] - pretty JSON array, requires `json-output`
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one message per line, requires `json-output`
//!
//! Every writer emits `from`, `text`, `is_service` and `is_outgoing`. The
//! remaining fields follow [`OutputConfig`](crate::core::OutputConfig).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> tgarchive::Result<()> {
//! use tgarchive::core::output::{to_csv, write_json, write_jsonl};
//! use tgarchive::core::OutputConfig;
//! use tgarchive::Message;
//!
//! let messages = vec![
//!     Message::new("message1", "Alice").with_text("Hello!"),
//!     Message::new("message2", "Bob").with_text("Hi there!"),
//! ];
//!
//! let config = OutputConfig::new().with_dates();
//!
//! write_json(&messages, "messages.json", &config)?;
//! write_jsonl(&messages, "messages.jsonl", &config)?;
//! let csv_string = to_csv(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(feature = "json-output")]
pub(crate) use record::OutputMessage;

#[cfg(feature = "json-output")]
mod record {
    use serde::Serialize;

    use crate::Message;
    use crate::core::models::OutputConfig;
    use crate::message::{
        AnimatedStickerAttachment, DocumentAttachment, PhotoAttachment, Reaction,
        StickerAttachment, VideoAttachment, VoiceAttachment,
    };

    /// Borrowed projection of a [`Message`] holding only the fields enabled
    /// in [`OutputConfig`]. Shared by the JSON and JSONL writers.
    #[derive(Serialize)]
    pub(crate) struct OutputMessage<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        date: Option<&'a str>,
        from: &'a str,
        text: Option<&'a str>,
        is_service: bool,
        is_outgoing: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        reply_to_message_id: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        forwarded_from: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        edited: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        edited_date: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reactions: Option<&'a [Reaction]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        photo: Option<&'a PhotoAttachment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        video: Option<&'a VideoAttachment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        voice_message: Option<&'a VoiceAttachment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sticker: Option<&'a StickerAttachment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animated_sticker: Option<&'a AnimatedStickerAttachment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        document: Option<&'a DocumentAttachment>,
    }

    impl<'a> OutputMessage<'a> {
        pub(crate) fn new(msg: &'a Message, config: &OutputConfig) -> Self {
            let attachments = config.include_attachments;
            Self {
                id: config.include_ids.then_some(msg.id.as_str()),
                date: config.include_dates.then_some(msg.date.as_str()),
                from: &msg.from,
                text: msg.text.as_deref(),
                is_service: msg.is_service,
                is_outgoing: msg.is_outgoing,
                // Forwards are references to other messages, like replies.
                reply_to_message_id: msg
                    .reply_to_message_id
                    .as_deref()
                    .filter(|_| config.include_replies),
                forwarded_from: msg
                    .forwarded_from
                    .as_deref()
                    .filter(|_| config.include_replies),
                edited: config.include_edited.then_some(msg.edited),
                edited_date: msg.edited_date.as_deref().filter(|_| config.include_edited),
                reactions: msg.reactions.as_deref().filter(|_| config.include_reactions),
                photo: msg.photo.as_ref().filter(|_| attachments),
                video: msg.video.as_ref().filter(|_| attachments),
                voice_message: msg.voice_message.as_ref().filter(|_| attachments),
                sticker: msg.sticker.as_ref().filter(|_| attachments),
                animated_sticker: msg.animated_sticker.as_ref().filter(|_| attachments),
                document: msg.document.as_ref().filter(|_| attachments),
            }
        }
    }
}
