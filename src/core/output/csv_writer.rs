//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: depend on [`OutputConfig`]
///   - Always: `From`, `Text`, `IsService`, `IsOutgoing`
///   - With IDs: `ID` first
///   - With dates: `Date` before `From`
///   - With replies: `ReplyTo`, `ForwardedFrom`
///   - With edited: `Edited`, `EditedDate`
///   - With reactions: `Reactions` as `emoji count` pairs joined by `, `
///   - With attachments: `Attachments` as `kind:path` pairs joined by `, `
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, messages, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], without touching the filesystem.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, messages, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(sink: W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_ids {
        header.push("ID");
    }
    if config.include_dates {
        header.push("Date");
    }

    header.extend(["From", "Text", "IsService", "IsOutgoing"]);

    if config.include_replies {
        header.extend(["ReplyTo", "ForwardedFrom"]);
    }
    if config.include_edited {
        header.extend(["Edited", "EditedDate"]);
    }
    if config.include_reactions {
        header.push("Reactions");
    }
    if config.include_attachments {
        header.push("Attachments");
    }

    header
}

/// Build CSV record for a single message.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_ids {
        record.push(msg.id.clone());
    }
    if config.include_dates {
        record.push(msg.date.clone());
    }

    record.push(msg.from.clone());
    record.push(msg.text.clone().unwrap_or_default());
    record.push(msg.is_service.to_string());
    record.push(msg.is_outgoing.to_string());

    if config.include_replies {
        record.push(msg.reply_to_message_id.clone().unwrap_or_default());
        record.push(msg.forwarded_from.clone().unwrap_or_default());
    }
    if config.include_edited {
        record.push(msg.edited.to_string());
        record.push(msg.edited_date.clone().unwrap_or_default());
    }
    if config.include_reactions {
        let reactions = msg
            .reactions
            .iter()
            .flatten()
            .map(|r| format!("{} {}", r.emoji, r.count))
            .collect::<Vec<_>>()
            .join(", ");
        record.push(reactions);
    }
    if config.include_attachments {
        let attachments = msg
            .attachments()
            .map(|a| format!("{}:{}", a.kind(), a.path()))
            .collect::<Vec<_>>()
            .join(", ");
        record.push(attachments);
    }

    record
}
