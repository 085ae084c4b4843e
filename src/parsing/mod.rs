//! Field extraction from one exported message container.
//!
//! Every extractor takes the container element and looks up its own
//! structural marker inside it. Extractors are independent and never fail:
//! a missing marker, a missing attribute or an unparseable number yields
//! `None` for that field only.
//!
//! The only state shared across containers, the sender carried forward for
//! messages that omit their sender line, lives in [`crate::parser`].

pub mod attachments;
pub mod metadata;
pub mod selectors;
pub mod text;

use std::str::FromStr;

use scraper::{ElementRef, Selector};
use tracing::debug;

pub use attachments::{
    extract_animated_sticker, extract_document, extract_photo, extract_sticker, extract_video,
    extract_voice, parse_duration, parse_file_size,
};
pub use metadata::{
    extract_date, extract_edited, extract_forwarded_from, extract_reactions, extract_reply_to,
    extract_sender, extract_text, is_service,
};
pub use text::{collapse_whitespace, flat_text, render_text};

/// First descendant of `element` matching `selector`.
pub(crate) fn first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

/// Value of `attr` on the first descendant matching `selector` that has it.
pub(crate) fn attr_of(element: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .find_map(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// Single-line text of the first descendant matching `selector`.
pub(crate) fn text_of(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    first(element, selector).map(flat_text)
}

/// Parses a number, leaving the field absent when the text is not one.
pub(crate) fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            if !raw.is_empty() {
                debug!(field, raw, "not a number, leaving field absent");
            }
            None
        }
    }
}
