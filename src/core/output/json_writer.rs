//! JSON output writer.

use std::fs::File;
use std::io::Write;

use super::OutputMessage;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to a JSON file as a pretty-printed array.
///
/// # Format
/// ```json
/// [
///   {"from": "Alice", "text": "Hello", "is_service": false, "is_outgoing": false},
///   {"from": "", "text": "3 June 2023", "is_service": true, "is_outgoing": false}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a JSON array string.
///
/// Same format as [`write_json`], without touching the filesystem.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let records: Vec<OutputMessage<'_>> = messages
        .iter()
        .map(|m| OutputMessage::new(m, config))
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}
