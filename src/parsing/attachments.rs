//! Attachment extractors.
//!
//! Each extractor looks for its own link or wrapper inside the container and
//! returns `None` when it isn't there. Static and animated stickers share a
//! link pattern and differ only in file extension.

use scraper::ElementRef;
use tracing::debug;

use super::selectors::{
    ANIMATED_STICKER_LINK, DOCUMENT_LINK, DOCUMENT_MIME, DOCUMENT_SIZE, PHOTO_IMAGE, PHOTO_LINK,
    STICKER_LINK, VIDEO_DURATION, VIDEO_LINK, VIDEO_THUMB, VOICE_LINK, VOICE_STATUS,
};
use super::{attr_of, first, parse_number, text_of};
use crate::message::{
    AnimatedStickerAttachment, DocumentAttachment, PhotoAttachment, StickerAttachment,
    VideoAttachment, VoiceAttachment,
};

/// The exporter always writes an hour field, even for short clips.
const DURATION_HOUR_PREFIX: &str = "00:";

/// The only size unit the exporter's document blocks are known to use.
const KILOBYTE_SUFFIX: &str = " KB";

pub fn extract_photo(container: ElementRef<'_>) -> Option<PhotoAttachment> {
    let link = first(container, &PHOTO_LINK)?;
    Some(PhotoAttachment {
        path: href(link),
        thumb_path: attr_of(link, &PHOTO_IMAGE, "src"),
        width: dimension(link, &PHOTO_IMAGE, "width"),
        height: dimension(link, &PHOTO_IMAGE, "height"),
        file_size: None,
    })
}

pub fn extract_video(container: ElementRef<'_>) -> Option<VideoAttachment> {
    let link = first(container, &VIDEO_LINK)?;
    Some(VideoAttachment {
        path: href(link),
        thumb_path: attr_of(link, &VIDEO_THUMB, "src"),
        duration: text_of(link, &VIDEO_DURATION).and_then(|raw| parse_duration(&raw)),
        width: dimension(link, &VIDEO_THUMB, "width"),
        height: dimension(link, &VIDEO_THUMB, "height"),
        file_size: None,
    })
}

pub fn extract_voice(container: ElementRef<'_>) -> Option<VoiceAttachment> {
    let link = first(container, &VOICE_LINK)?;
    Some(VoiceAttachment {
        path: href(link),
        duration: text_of(link, &VOICE_STATUS).and_then(|raw| parse_duration(&raw)),
        file_size: None,
    })
}

pub fn extract_sticker(container: ElementRef<'_>) -> Option<StickerAttachment> {
    let link = first(container, &STICKER_LINK)?;
    Some(StickerAttachment {
        path: href(link),
        emoji: link_text(link),
    })
}

pub fn extract_animated_sticker(container: ElementRef<'_>) -> Option<AnimatedStickerAttachment> {
    let link = first(container, &ANIMATED_STICKER_LINK)?;
    Some(AnimatedStickerAttachment {
        path: href(link),
        emoji: link_text(link),
    })
}

pub fn extract_document(container: ElementRef<'_>) -> Option<DocumentAttachment> {
    let link = first(container, &DOCUMENT_LINK)?;
    Some(DocumentAttachment {
        path: href(link),
        file_size: text_of(link, &DOCUMENT_SIZE).and_then(|raw| parse_file_size(&raw)),
        mime_type: text_of(link, &DOCUMENT_MIME),
    })
}

/// Parses an exporter duration into seconds.
///
/// One leading `"00:"` hour field is stripped and the rest must be a plain
/// integer. Anything else is absent, including durations of an hour or more
/// (`"1:02:47"`) and `MM:SS` remainders (`"00:01:05"`).
///
/// ```
/// use tgarchive::parsing::parse_duration;
///
/// assert_eq!(parse_duration("00:47"), Some(47));
/// assert_eq!(parse_duration("1:02:47"), None);
/// ```
pub fn parse_duration(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let seconds = raw.strip_prefix(DURATION_HOUR_PREFIX).unwrap_or(raw);
    parse_number("duration", seconds)
}

/// Parses a document size like `"512 KB"` into bytes.
///
/// Only the `" KB"` suffix is understood; a bare number is read as
/// kilobytes too. Other units (`"2 MB"`,
/// `"900 bytes"`) and fractional sizes (`"12.5 KB"`) are absent, never zero
/// or a wrong value.
///
/// ```
/// use tgarchive::parsing::parse_file_size;
///
/// assert_eq!(parse_file_size("512 KB"), Some(524_288));
/// assert_eq!(parse_file_size("2 MB"), None);
/// ```
pub fn parse_file_size(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let kilobytes = raw.strip_suffix(KILOBYTE_SUFFIX).unwrap_or(raw);
    let bytes = parse_number::<u64>("file size", kilobytes)?.checked_mul(1024);
    if bytes.is_none() {
        debug!(raw, "file size overflows, leaving field absent");
    }
    bytes
}

fn href(link: ElementRef<'_>) -> String {
    link.value().attr("href").unwrap_or_default().to_string()
}

fn dimension(
    link: ElementRef<'_>,
    selector: &scraper::Selector,
    attr: &'static str,
) -> Option<u32> {
    attr_of(link, selector, attr).and_then(|raw| parse_number(attr, raw.trim()))
}

fn link_text(link: ElementRef<'_>) -> Option<String> {
    let text = super::flat_text(link);
    (!text.is_empty()).then_some(text)
}
