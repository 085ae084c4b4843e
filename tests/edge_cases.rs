//! Boundary behavior of the export parser.
//!
//! Malformed or unexpected markup must degrade to absent fields, never to
//! errors, zeros or wrong values.

use tgarchive::parsing::{parse_duration, parse_file_size};
use tgarchive::prelude::*;

fn parse(html: &str) -> Vec<Message> {
    ExportParser::new().parse_str(html)
}

fn single(html: &str) -> Message {
    let mut messages = parse(html);
    assert_eq!(messages.len(), 1, "expected exactly one message");
    messages.remove(0)
}

fn voice(status: &str) -> String {
    format!(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="media_voice_message" href="voice_messages/a.ogg"><div class="status details">{status}</div></a></div>"#
    )
}

fn video(duration: &str) -> String {
    format!(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="video_file_wrap" href="video_files/v.mp4"><div class="video_duration">{duration}</div></a></div>"#
    )
}

fn document(size: &str) -> String {
    format!(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="media_document" href="files/f.bin"><div class="file_size">{size}</div></a></div>"#
    )
}

// =========================================================================
// Empty and malformed input
// =========================================================================

#[test]
fn test_empty_string() {
    assert!(parse("").is_empty());
}

#[test]
fn test_document_without_containers() {
    assert!(parse("<html><body><p>Nothing exported</p></body></html>").is_empty());
}

#[test]
fn test_plain_text_input() {
    assert!(parse("this is not html at all").is_empty());
}

#[test]
fn test_unclosed_tags_still_parse() {
    let html = r#"<div class="message default" id="message1"><div class="from_name">Alice<div class="text">hi"#;
    let msg = single(html);
    assert_eq!(msg.id, "message1");
    assert!(msg.text.is_some());
}

#[test]
fn test_container_without_id() {
    let msg = single(r#"<div class="message default"><div class="from_name">A</div></div>"#);
    assert_eq!(msg.id, "");
}

#[test]
fn test_regular_message_without_anything() {
    let msg = single(r#"<div class="message default" id="message1"></div>"#);
    assert_eq!(msg.from, " ");
    assert_eq!(msg.date, "");
    assert!(msg.text.is_none());
    assert!(!msg.has_attachment());
    assert!(msg.reactions.is_none());
    assert!(!msg.edited);
}

#[test]
fn test_text_with_quote_and_nested_blocks() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <div class="text">Hi<blockquote>quoted</blockquote>after</div></div>"#,
    );
    assert_eq!(msg.text.as_deref(), Some("Hi\nquoted\nafter"));
}

#[test]
fn test_animated_sticker_link_with_caption_blocks() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="media_clip clearfix pull_left block_link" href="stickers/sticker.tgs">
             <div class="body"><div class="title bold">Sticker</div><div class="status details">😀, 12 KB</div></div>
           </a></div>"#,
    );
    let sticker = msg.animated_sticker.expect("tgs link recognized");
    assert_eq!(sticker.emoji.as_deref(), Some("Sticker 😀, 12 KB"));
}

// =========================================================================
// Duration boundaries
// =========================================================================

#[test]
fn test_voice_duration_short() {
    let msg = single(&voice("00:47"));
    assert_eq!(msg.voice_message.unwrap().duration, Some(47));
}

#[test]
fn test_voice_duration_over_an_hour_is_absent() {
    // Only a leading "00:" is stripped; a real hour field is not understood.
    let msg = single(&voice("1:02:47"));
    let attachment = msg.voice_message.expect("voice link still recognized");
    assert_eq!(attachment.duration, None);
    assert_eq!(attachment.path, "voice_messages/a.ogg");
}

#[test]
fn test_voice_status_with_size_is_absent() {
    let msg = single(&voice("00:47, 183.9 KB"));
    assert_eq!(msg.voice_message.unwrap().duration, None);
}

#[test]
fn test_video_duration_minutes_remainder_is_absent() {
    let msg = single(&video("00:01:05"));
    assert_eq!(msg.video.unwrap().duration, None);
}

#[test]
fn test_video_duration_non_numeric() {
    let msg = single(&video("n/a"));
    assert_eq!(msg.video.unwrap().duration, None);
}

#[test]
fn test_duration_helper_boundaries() {
    assert_eq!(parse_duration("00:47"), Some(47));
    assert_eq!(parse_duration("  00:09 "), Some(9));
    assert_eq!(parse_duration("47"), Some(47));
    assert_eq!(parse_duration("1:02:47"), None);
    assert_eq!(parse_duration(""), None);
}

// =========================================================================
// File size boundaries
// =========================================================================

#[test]
fn test_file_size_kilobytes() {
    let msg = single(&document("512 KB"));
    assert_eq!(msg.document.unwrap().file_size, Some(524_288));
}

#[test]
fn test_file_size_megabytes_is_absent_not_zero() {
    let msg = single(&document("2 MB"));
    let doc = msg.document.expect("document link still recognized");
    assert_eq!(doc.file_size, None);
    assert_eq!(doc.path, "files/f.bin");
}

#[test]
fn test_file_size_helper_boundaries() {
    assert_eq!(parse_file_size("512 KB"), Some(524_288));
    assert_eq!(parse_file_size("0 KB"), Some(0));
    assert_eq!(parse_file_size("2 MB"), None);
    assert_eq!(parse_file_size("900 bytes"), None);
    assert_eq!(parse_file_size("12.5 KB"), None);
    assert_eq!(parse_file_size("18446744073709551615 KB"), None);
}

#[test]
fn test_missing_mime_type() {
    let msg = single(&document("1 KB"));
    assert_eq!(msg.document.unwrap().mime_type, None);
}

// =========================================================================
// Reactions, replies and edits
// =========================================================================

#[test]
fn test_reaction_non_numeric_count_defaults_to_one() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <span class="reaction"><span class="emoji">❤</span><span class="count">lots</span></span></div>"#,
    );
    let reactions = msg.reactions.unwrap();
    assert_eq!(reactions, vec![Reaction::new("❤", 1, "")]);
}

#[test]
fn test_reaction_numeric_count() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <span class="reaction"><span class="emoji">🔥</span><span class="count"> 12 </span></span></div>"#,
    );
    assert_eq!(msg.reactions.unwrap()[0].count, 12);
}

#[test]
fn test_reply_without_expected_prefix_is_kept_verbatim() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a onclick="return GoToMessageSoon(7)">x</a></div>"#,
    );
    assert_eq!(msg.reply_to_message_id.as_deref(), Some("return GoToMessageSoon(7"));
}

#[test]
fn test_edited_without_title() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <div class="pull_right edited details">edited</div></div>"#,
    );
    assert!(msg.edited);
    assert_eq!(msg.edited_date.as_deref(), Some(""));
    assert!(msg.edited_timestamp().is_none());
}

// =========================================================================
// Attachments
// =========================================================================

#[test]
fn test_photo_without_dimensions() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="photo_wrap" href="photos/p.jpg"><img class="photo" src="photos/p_thumb.jpg"></a></div>"#,
    );
    let photo = msg.photo.unwrap();
    assert_eq!(photo.width, None);
    assert_eq!(photo.height, None);
    assert_eq!(photo.thumb_path.as_deref(), Some("photos/p_thumb.jpg"));
}

#[test]
fn test_photo_with_bad_dimensions() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="photo_wrap" href="photos/p.jpg"><img class="photo" width="wide" height="-3"></a></div>"#,
    );
    let photo = msg.photo.unwrap();
    assert_eq!(photo.width, None);
    assert_eq!(photo.height, None);
}

#[test]
fn test_sticker_with_other_extension_ignored() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a href="stickers/sticker.png">x</a></div>"#,
    );
    assert!(msg.sticker.is_none());
    assert!(msg.animated_sticker.is_none());
}

#[test]
fn test_sticker_without_emoji() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a href="stickers/s.webp"></a></div>"#,
    );
    assert_eq!(msg.sticker.unwrap().emoji, None);
}

#[test]
fn test_several_attachment_kinds_in_one_container() {
    let msg = single(
        r#"<div class="message default" id="message1"><div class="from_name">A</div>
           <a class="photo_wrap" href="photos/p.jpg"></a>
           <a class="media_document" href="files/f.txt"></a></div>"#,
    );
    let kinds: Vec<AttachmentKind> = msg.attachments().map(|a| a.kind()).collect();
    assert_eq!(kinds, [AttachmentKind::Photo, AttachmentKind::Document]);
}

// =========================================================================
// Sender handling
// =========================================================================

#[test]
fn test_outgoing_requires_exact_name() {
    let config = ParserConfig::new().with_self_name("Alice");
    let html = r#"<div class="message default" id="message1"><div class="from_name">alice</div></div>
                  <div class="message default" id="message2"><div class="from_name">Alice </div></div>"#;
    let messages = parse_html(html, &config);
    assert!(!messages[0].is_outgoing);
    assert!(messages[1].is_outgoing);
}

#[test]
fn test_blank_sender_line_inherits() {
    let html = r#"<div class="message default" id="message1"><div class="from_name">Alice</div></div>
                  <div class="message default" id="message2"><div class="from_name">   </div></div>"#;
    let messages = parse(html);
    assert_eq!(messages[1].from, "Alice");
}

#[test]
fn test_service_before_first_sender() {
    let html = r#"<div class="message service" id="message-1"><div class="body details">3 June 2023</div></div>
                  <div class="message default joined" id="message1"><div class="text">hi</div></div>"#;
    let messages = parse(html);
    assert_eq!(messages[1].from, " ");
}

#[test]
fn test_invalid_utf8_is_the_only_error() {
    let err = ExportParser::new().parse_bytes(b"\xff\xfe<div>").unwrap_err();
    assert!(err.is_decode());
    assert!(err.to_string().contains("UTF-8"));
}
