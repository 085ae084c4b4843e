//! # tgarchive
//!
//! Turns Telegram Desktop's "Export chat history" HTML pages into structured
//! message records.
//!
//! ## Overview
//!
//! The exporter writes one `messages.html` page per chunk of history. Each
//! entry is a `div.message` container, either a regular message (sender,
//! date, text, attachments, reply, reactions, edit marker) or a service
//! notice such as a date separator. This crate walks those containers in
//! document order and produces one [`Message`] per container.
//!
//! Parsing is forgiving: markup the exporter didn't write, or wrote
//! differently, leaves the affected field absent instead of failing the
//! whole export. Only undecodable bytes and I/O are reported as errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tgarchive::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = ExportParser::with_config(ParserConfig::new().with_self_name("Alice Smith"));
//!     let messages = parser.parse("ChatExport/messages.html".as_ref())?;
//!
//!     let recent = apply_filters(messages, &FilterConfig::new().with_date_from("2023-06-01")?);
//!     write_json(&recent, "messages.json", &OutputConfig::all())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ExportParser`](parser::ExportParser), the document walker
//! - [`parsing`] - per-field extractors and selectors
//! - [`message`] - [`Message`] and attachment records
//! - [`config`] - [`ParserConfig`](config::ParserConfig)
//! - [`core`] - filtering, statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`TgArchiveError`] and [`Result`]
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{Result, TgArchiveError};
pub use message::{
    AnimatedStickerAttachment, Attachment, AttachmentKind, DocumentAttachment, Message,
    PhotoAttachment, Reaction, StickerAttachment, VideoAttachment, VoiceAttachment,
};
pub use parser::{ExportParser, parse_html};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tgarchive::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::message::{Attachment, AttachmentKind, Reaction};

    pub use crate::error::{Result, TgArchiveError};

    pub use crate::config::ParserConfig;
    pub use crate::parser::{Chat, ChatExport, ExportParser, parse_html};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::stats::ExportStats;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
