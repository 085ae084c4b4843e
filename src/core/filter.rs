//! Filter parsed messages by date range, sender and kind.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//! | Service | [`without_service`](FilterConfig::without_service) | Drop date separators and notices |
//!
//! # Examples
//!
//! ```
//! use tgarchive::core::filter::{FilterConfig, apply_filters};
//! use tgarchive::Message;
//!
//! # fn main() -> tgarchive::Result<()> {
//! let messages = vec![
//!     Message::service("message-1", "3 June 2023"),
//!     Message::new("message1", "Alice").with_date("03.06.2023 10:00:00 UTC+03:00"),
//!     Message::new("message2", "Bob").with_date("05.06.2023 10:00:00 UTC+03:00"),
//! ];
//!
//! let config = FilterConfig::new().with_date_from("2023-06-04")?;
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].from, "Bob");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Dates are compared in UTC, whatever offset the export was written in
//! - Messages without a parseable date are **excluded** when date filters are active
//! - Sender matching is case-insensitive for ASCII characters and never
//!   matches service messages
//! - Multiple filters are combined with AND logic, order is preserved

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::Message;
use crate::error::{Result, TgArchiveError};

/// Configuration for filtering messages.
///
/// A message must match all active filters to be kept.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Keep only messages on or after this instant.
    pub after: Option<DateTime<Utc>>,

    /// Keep only messages on or before this instant.
    pub before: Option<DateTime<Utc>>,

    /// Keep only messages from this sender (case-insensitive).
    pub from: Option<String>,

    /// Drop service messages.
    pub skip_service: bool,
}

impl FilterConfig {
    /// Creates a filter configuration that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive), `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TgArchiveError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_day(date_str, NaiveTime::MIN)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive), `YYYY-MM-DD`.
    ///
    /// The whole day is included.
    ///
    /// # Errors
    ///
    /// Returns [`TgArchiveError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.before = Some(parse_day(date_str, end_of_day)?);
        Ok(self)
    }

    /// Sets the sender filter, matched case-insensitively for ASCII.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Drops service messages.
    #[must_use]
    pub fn without_service(mut self) -> Self {
        self.skip_service = true;
        self
    }

    /// Sets the start instant directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end instant directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.from.is_some() || self.skip_service
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if self.skip_service && msg.is_service {
            return false;
        }

        if let Some(ref from) = self.from {
            if msg.is_service || !msg.from.eq_ignore_ascii_case(from) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = msg.timestamp().map(|ts| ts.with_timezone(&Utc)) else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

fn parse_day(date_str: &str, time: NaiveTime) -> Result<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TgArchiveError::invalid_date(date_str))?;
    Ok(day.and_time(time).and_utc())
}

/// Filters messages, keeping their order.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
