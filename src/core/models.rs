//! Output configuration.

/// Controls which message fields the writers emit.
///
/// `from`, `text`, `is_service` and `is_outgoing` are always written; every
/// other field is opt-in.
///
/// ```
/// use tgarchive::core::OutputConfig;
///
/// let config = OutputConfig::new().with_dates().with_replies();
/// assert!(config.include_dates);
/// assert!(!config.include_ids);
/// assert!(OutputConfig::all().include_attachments);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputConfig {
    /// Include the container id
    pub include_ids: bool,
    /// Include the date string
    pub include_dates: bool,
    /// Include the replied-to message id
    pub include_replies: bool,
    /// Include the edited flag and edit date
    pub include_edited: bool,
    /// Include reactions
    pub include_reactions: bool,
    /// Include attachment records
    pub include_attachments: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional field enabled.
    pub fn all() -> Self {
        Self {
            include_ids: true,
            include_dates: true,
            include_replies: true,
            include_edited: true,
            include_reactions: true,
            include_attachments: true,
        }
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }

    #[must_use]
    pub fn with_dates(mut self) -> Self {
        self.include_dates = true;
        self
    }

    #[must_use]
    pub fn with_replies(mut self) -> Self {
        self.include_replies = true;
        self
    }

    #[must_use]
    pub fn with_edited(mut self) -> Self {
        self.include_edited = true;
        self
    }

    #[must_use]
    pub fn with_reactions(mut self) -> Self {
        self.include_reactions = true;
        self
    }

    #[must_use]
    pub fn with_attachments(mut self) -> Self {
        self.include_attachments = true;
        self
    }
}
