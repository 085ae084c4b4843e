//! Document walker for Telegram HTML exports.
//!
//! [`ExportParser`] finds every `div.message` container in document order,
//! classifies it as a service or regular message and runs the field
//! extractors from [`crate::parsing`] over it.
//!
//! Parsing never fails on the document itself. The HTML5 tree builder
//! recovers from unclosed tags and stray text, so broken markup yields fewer
//! or sparser messages, never an error. The only errors come from turning
//! bytes into text, see [`ExportParser::parse_bytes`].
//!
//! # Example
//!
//! ```rust
//! use tgarchive::parser::ExportParser;
//! use tgarchive::config::ParserConfig;
//!
//! let html = r#"
//!   <div class="message service" id="message-1"><div class="body details">3 June 2023</div></div>
//!   <div class="message default" id="message10">
//!     <div class="body">
//!       <div class="pull_right date details" title="03.06.2023 14:22:05 UTC+03:00">14:22</div>
//!       <div class="from_name">Alice</div>
//!       <div class="text">Hi!</div>
//!     </div>
//!   </div>
//!   <div class="message default joined" id="message11">
//!     <div class="body"><div class="text">Still there?</div></div>
//!   </div>"#;
//!
//! let parser = ExportParser::with_config(ParserConfig::new().with_self_name("Alice"));
//! let messages = parser.parse_str(html);
//!
//! assert_eq!(messages.len(), 3);
//! assert!(messages[0].is_service);
//! assert_eq!(messages[2].from, "Alice");
//! assert!(messages[2].is_outgoing);
//! ```

use std::fs;
use std::path::Path;

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info_span};

use crate::config::ParserConfig;
use crate::error::{Result, TgArchiveError};
use crate::message::Message;
use crate::parsing::{self, selectors};

/// Sender used when the very first message of an export omits its sender.
const UNKNOWN_SENDER: &str = " ";

/// Parser for Telegram "Export chat history" HTML pages.
///
/// Holds only configuration; each call is an independent, pure pass over
/// its input, so one parser can be reused and shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ExportParser {
    config: ParserConfig,
}

impl ExportParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the human-readable name of this parser.
    pub fn name(&self) -> &'static str {
        "Telegram HTML"
    }

    /// Parses an export page into messages, in document order.
    ///
    /// A document without message containers yields an empty vector.
    pub fn parse_str(&self, content: &str) -> Vec<Message> {
        self.parse_document(&Html::parse_document(content), content.len())
    }

    /// Decodes `bytes` as UTF-8 and parses them.
    ///
    /// # Errors
    ///
    /// Returns [`TgArchiveError::Decode`] if the input is not valid UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Message>> {
        let content =
            std::str::from_utf8(bytes).map_err(|err| TgArchiveError::decode("export", err))?;
        Ok(self.parse_str(content))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`TgArchiveError::Io`] if the file cannot be read and
    /// [`TgArchiveError::Decode`] if it is not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let bytes = fs::read(path)?;
        let content = std::str::from_utf8(&bytes)
            .map_err(|err| TgArchiveError::decode(path.display().to_string(), err))?;
        Ok(self.parse_str(content))
    }

    /// Parses an export page together with its chat header.
    pub fn parse_export(&self, content: &str) -> ChatExport {
        let document = Html::parse_document(content);
        let messages = self.parse_document(&document, content.len());
        let title = document
            .select(&selectors::PAGE_TITLE)
            .next()
            .map(parsing::flat_text)
            .filter(|title| !title.is_empty());

        let last_message_time = messages
            .iter()
            .rev()
            .find(|msg| !msg.is_service && !msg.date.is_empty())
            .map(|msg| msg.date.clone());

        ChatExport {
            chat: Chat {
                chat_id: self.config.chat_id.clone(),
                title,
                last_message_time,
            },
            messages,
        }
    }

    fn parse_document(&self, document: &Html, bytes: usize) -> Vec<Message> {
        let span = info_span!("parse_export", bytes);
        let _guard = span.enter();

        let messages = self.walk(document);

        debug!(count = messages.len(), "parsed export");
        messages
    }

    /// Folds the containers into messages, carrying the last regular
    /// sender forward for containers that omit theirs.
    fn walk(&self, document: &Html) -> Vec<Message> {
        document
            .select(&selectors::MESSAGE)
            .fold(Walk::default(), |walk, container| {
                let message = self.extract(container, walk.last_sender.as_deref());
                walk.push(message)
            })
            .messages
    }

    fn extract(&self, container: ElementRef<'_>, last_sender: Option<&str>) -> Message {
        let id = container.value().attr("id").unwrap_or_default();
        let span = debug_span!("message", id);
        let _guard = span.enter();

        let message = if parsing::is_service(container) {
            Message::service(id, parsing::metadata::extract_service_text(container))
        } else {
            self.extract_regular(id, container, last_sender)
        };

        message.with_chat_id(self.config.chat_id.as_str())
    }

    fn extract_regular(
        &self,
        id: &str,
        container: ElementRef<'_>,
        last_sender: Option<&str>,
    ) -> Message {
        let from = parsing::extract_sender(container)
            .unwrap_or_else(|| last_sender.unwrap_or(UNKNOWN_SENDER).to_string());
        let edited_date = parsing::extract_edited(container);

        Message {
            id: id.to_string(),
            chat_id: String::new(),
            is_service: false,
            is_outgoing: self.config.is_self(&from),
            date: parsing::extract_date(container),
            text: parsing::extract_text(container),
            photo: parsing::extract_photo(container),
            video: parsing::extract_video(container),
            voice_message: parsing::extract_voice(container),
            sticker: parsing::extract_sticker(container),
            animated_sticker: parsing::extract_animated_sticker(container),
            document: parsing::extract_document(container),
            reply_to_message_id: parsing::extract_reply_to(container),
            forwarded_from: parsing::extract_forwarded_from(container),
            reactions: parsing::extract_reactions(container),
            edited: edited_date.is_some(),
            edited_date,
            from,
        }
    }
}

/// Accumulator of the container fold.
///
/// Only regular messages update `last_sender`: a sender-less message right
/// after a date separator or join notice still belongs to the person who
/// wrote before it, not to the notice.
#[derive(Default)]
struct Walk {
    messages: Vec<Message>,
    /// `from` of the latest regular message; service messages don't count.
    last_sender: Option<String>,
}

impl Walk {
    fn push(mut self, message: Message) -> Self {
        if !message.is_service {
            self.last_sender = Some(message.from.clone());
        }
        self.messages.push(message);
        self
    }
}

/// Parses an export page with the given configuration.
///
/// Shorthand for `ExportParser::with_config(config.clone()).parse_str(content)`.
pub fn parse_html(content: &str, config: &ParserConfig) -> Vec<Message> {
    ExportParser::with_config(config.clone()).parse_str(content)
}

/// Chat-level information of one export page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Chat {
    pub chat_id: String,
    /// Title from the page header (the peer's name for personal chats).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Date of the last regular message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message_time: Option<String>,
}

/// A parsed export page: chat header plus messages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatExport {
    pub chat: Chat,
    pub messages: Vec<Message>,
}
