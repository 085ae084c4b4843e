//! JSON Lines (JSONL) output writer.
//!
//! One message object per line, suited to line-oriented tools and to
//! appending several exports into one file.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::OutputMessage;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to a JSONL file.
///
/// ```jsonl
/// {"from":"Alice","text":"Hello","is_service":false,"is_outgoing":false}
/// {"from":"Bob","text":"Hi","is_service":false,"is_outgoing":true}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        serde_json::to_writer(&mut writer, &OutputMessage::new(msg, config))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut output = String::new();
    for msg in messages {
        output.push_str(&serde_json::to_string(&OutputMessage::new(msg, config))?);
        output.push('\n');
    }
    Ok(output)
}
