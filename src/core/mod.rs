//! Post-processing of parsed messages.
//!
//! - [`models`] - [`OutputConfig`] for the writers
//! - [`filter`] - filtering by date, sender and kind
//! - [`stats`] - summary counts
//! - [`output`] - format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use tgarchive::core::{
//!     ExportStats, FilterConfig, OutputConfig,
//!     apply_filters, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod stats;

pub use filter::{FilterConfig, apply_filters};
pub use models::OutputConfig;
pub use stats::ExportStats;

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
