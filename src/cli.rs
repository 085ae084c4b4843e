//! Command-line interface definition using clap.
//!
//! - [`Args`] - argument structure of the `tgarchive` binary
//! - [`OutputFormat`] - `--format` values, convertible to [`crate::format::OutputFormat`]

use clap::{Parser, ValueEnum};

use crate::config::ParserConfig;
use crate::core::{FilterConfig, OutputConfig};
use crate::error::Result;

/// Default output path; its extension follows `--format` when left as is.
pub const DEFAULT_OUTPUT: &str = "messages.json";

/// Convert a Telegram "Export chat history" HTML page into JSON, JSONL or CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgarchive")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tgarchive ChatExport/messages.html
    tgarchive messages.html --me \"Alice Smith\" -f csv -o alice.csv
    tgarchive messages.html --after 2023-06-01 --no-service --all
    RUST_LOG=tgarchive=debug tgarchive messages.html")]
pub struct Args {
    /// Path to the exported messages.html
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Your display name in the export; matching messages are marked outgoing
    #[arg(long = "me", value_name = "NAME", env = "TGARCHIVE_SELF_NAME")]
    pub self_name: Option<String>,

    /// Chat identifier copied onto every message
    #[arg(long, value_name = "ID", default_value = "")]
    pub chat_id: String,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender only
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Drop service messages (date separators, join notices)
    #[arg(long)]
    pub no_service: bool,

    /// Include dates in output
    #[arg(short = 't', long)]
    pub dates: bool,

    /// Include message IDs in output
    #[arg(long)]
    pub ids: bool,

    /// Include reply and forward references in output
    #[arg(short = 'r', long)]
    pub replies: bool,

    /// Include edit markers in output
    #[arg(short = 'e', long)]
    pub edited: bool,

    /// Include reactions in output
    #[arg(long)]
    pub reactions: bool,

    /// Include attachments in output
    #[arg(short = 'a', long)]
    pub attachments: bool,

    /// Include every optional field
    #[arg(long)]
    pub all: bool,

    /// Log parser diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parser_config(&self) -> ParserConfig {
        let config = ParserConfig::new().with_chat_id(self.chat_id.as_str());
        match self.self_name {
            Some(ref name) => config.with_self_name(name.as_str()),
            None => config,
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::TgArchiveError::InvalidDate`] for malformed dates.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_sender(from.as_str());
        }
        if self.no_service {
            config = config.without_service();
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        if self.all {
            return OutputConfig::all();
        }
        OutputConfig {
            include_ids: self.ids,
            include_dates: self.dates,
            include_replies: self.replies,
            include_edited: self.edited,
            include_reactions: self.reactions,
            include_attachments: self.attachments,
        }
    }

    /// Output path with the extension adjusted to the format when the
    /// default path is in use.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("messages.{}", format.extension())
    }
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON array of messages
    #[default]
    Json,

    /// JSON Lines, one message per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tgarchive").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["messages.html"]);
        assert_eq!(args.input, "messages.html");
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.output_path(), "messages.json");
        assert_eq!(args.output_config(), OutputConfig::new());
        assert!(!args.filter_config().unwrap().is_active());
    }

    #[test]
    fn test_output_extension_follows_format() {
        assert_eq!(parse(&["in.html", "-f", "csv"]).output_path(), "messages.csv");
        assert_eq!(parse(&["in.html", "-f", "ndjson"]).output_path(), "messages.jsonl");
        assert_eq!(
            parse(&["in.html", "-f", "csv", "-o", "out.txt"]).output_path(),
            "out.txt"
        );
    }

    #[test]
    fn test_parser_config() {
        let args = parse(&["in.html", "--me", "Alice", "--chat-id", "42"]);
        let config = args.parser_config();
        assert_eq!(config.self_display_name.as_deref(), Some("Alice"));
        assert_eq!(config.chat_id, "42");
    }

    #[test]
    fn test_output_flags() {
        let args = parse(&["in.html", "-t", "--ids", "-r", "--reactions"]);
        let config = args.output_config();
        assert!(config.include_dates && config.include_ids && config.include_replies);
        assert!(config.include_reactions);
        assert!(!config.include_edited && !config.include_attachments);

        assert_eq!(parse(&["in.html", "--all"]).output_config(), OutputConfig::all());
    }

    #[test]
    fn test_filter_flags() {
        let args = parse(&["in.html", "--after", "2023-06-01", "--from", "Bob", "--no-service"]);
        let config = args.filter_config().unwrap();
        assert!(config.after.is_some());
        assert_eq!(config.from.as_deref(), Some("Bob"));
        assert!(config.skip_service);

        let bad = parse(&["in.html", "--before", "June"]);
        assert!(bad.filter_config().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["tgarchive", "in.html", "-f", "xml"]).is_err());
    }
}
