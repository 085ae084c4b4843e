//! Parser configuration.
//!
//! The export format itself is fixed; what varies between exports is who
//! "me" is and which chat the messages belong to. Neither can be read from
//! the HTML, so the caller supplies both here.
//!
//! # Example
//!
//! ```rust
//! use tgarchive::config::ParserConfig;
//! use tgarchive::parser::ExportParser;
//!
//! let config = ParserConfig::new()
//!     .with_self_name("Alice Smith")
//!     .with_chat_id("alice-bob");
//!
//! let parser = ExportParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`ExportParser`](crate::parser::ExportParser).
///
/// Deserializable so it can live in a settings file next to the archive.
///
/// ```rust
/// use tgarchive::config::ParserConfig;
///
/// let config: ParserConfig = serde_json::from_str(r#"{"self_display_name": "Alice"}"#).unwrap();
/// assert!(config.is_self("Alice"));
/// assert_eq!(config.chat_id, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Display name of the exporting account (default: none).
    ///
    /// Messages whose sender equals this name exactly are outgoing.
    /// With no name set, every message is incoming.
    #[serde(default)]
    pub self_display_name: Option<String>,

    /// Chat identifier stamped onto every parsed message (default: empty).
    #[serde(default)]
    pub chat_id: String,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name that marks a message as outgoing.
    #[must_use]
    pub fn with_self_name(mut self, name: impl Into<String>) -> Self {
        self.self_display_name = Some(name.into());
        self
    }

    /// Sets the chat identifier assigned to parsed messages.
    #[must_use]
    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = chat_id.into();
        self
    }

    /// Returns `true` if `sender` is the configured self name.
    ///
    /// Comparison is exact: no trimming, no case folding.
    pub fn is_self(&self, sender: &str) -> bool {
        self.self_display_name
            .as_deref()
            .is_some_and(|name| name == sender)
    }
}
