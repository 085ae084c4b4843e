//! Unified error types for tgarchive.
//!
//! Parsing an export is deliberately forgiving: malformed markup, missing
//! fields and unparseable numbers all degrade to "absent" values instead of
//! errors. What remains here are the failures a caller can actually act on:
//!
//! - the input bytes are not valid UTF-8 ([`TgArchiveError::Decode`])
//! - the file cannot be read or written ([`TgArchiveError::Io`])
//! - a filter or output option is invalid
//! - an output serializer failed

use std::io;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

use thiserror::Error;

/// A specialized [`Result`] type for tgarchive operations.
///
/// # Example
///
/// ```rust
/// use tgarchive::error::Result;
/// use tgarchive::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TgArchiveError>;

/// The error type for all tgarchive operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TgArchiveError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input could not be decoded as UTF-8 text.
    ///
    /// This is the only way parsing an export can fail: without text there
    /// is no document to walk.
    #[error("Cannot decode {context} as UTF-8: {source}")]
    Decode {
        /// Description of what was being decoded
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: Utf8Error,
    },

    /// A value doesn't match the expected format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FromUtf8Error> for TgArchiveError {
    fn from(err: FromUtf8Error) -> Self {
        TgArchiveError::decode("output buffer", err.utf8_error())
    }
}

impl TgArchiveError {
    /// Creates a decode error.
    pub fn decode(context: impl Into<String>, source: Utf8Error) -> Self {
        TgArchiveError::Decode {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TgArchiveError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TgArchiveError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TgArchiveError::Io(_))
    }

    /// Returns `true` if the input could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, TgArchiveError::Decode { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TgArchiveError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TgArchiveError::InvalidDate { .. })
    }
}
