//! Extractors for message metadata: kind, date, sender, text, reply,
//! reactions and the edit marker.

use scraper::ElementRef;
use tracing::debug;

use super::selectors::{
    DATE, EDITED, FORWARDED, FROM_NAME, MEDIA_WRAP, REACTION, REACTION_COUNT, REACTION_EMOJI,
    REACTION_USERPIC, REPLY_LINK, SERVICE_BODY, TEXT,
};
use super::text::{flat_text, own_text, render_text};
use super::{attr_of, first, parse_number, text_of};
use crate::message::Reaction;

const REPLY_PREFIX: &str = "return GoToMessage(";
const REPLY_SUFFIX: &str = ")";

/// Service containers carry a `service` class next to `message`.
pub fn is_service(container: ElementRef<'_>) -> bool {
    container.value().classes().any(|class| class == "service")
}

/// Text of a service message body, e.g. a date separator.
pub fn extract_service_text(container: ElementRef<'_>) -> String {
    container
        .select(&SERVICE_BODY)
        .map(render_text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Message date, preferring the machine-readable `title` attribute over the
/// visible `HH:MM` text. Empty when neither is present.
pub fn extract_date(container: ElementRef<'_>) -> String {
    attr_of(container, &DATE, "title")
        .filter(|title| !title.trim().is_empty())
        .or_else(|| text_of(container, &DATE))
        .unwrap_or_default()
}

/// Sender name of the message itself.
///
/// Sender lines inside a forwarded block name the original author and are
/// skipped. Returns `None` when the exporter omitted the sender, which it
/// does for consecutive messages from the same person.
pub fn extract_sender(container: ElementRef<'_>) -> Option<String> {
    container
        .select(&FROM_NAME)
        .find(|name| !inside_forwarded(*name, container))
        .map(flat_text)
        .filter(|name| !name.is_empty())
}

/// Original author of a forwarded message.
pub fn extract_forwarded_from(container: ElementRef<'_>) -> Option<String> {
    let forwarded = first(container, &FORWARDED)?;
    let name = first(forwarded, &FROM_NAME).map(own_text)?;
    (!name.is_empty()).then_some(name)
}

/// Text content of the message.
///
/// `None` when there is no text region, which is how the exporter renders a
/// media-only message. Several text regions (e.g. a comment plus forwarded
/// text) are joined with a line break.
pub fn extract_text(container: ElementRef<'_>) -> Option<String> {
    let parts: Vec<String> = container.select(&TEXT).map(render_text).collect();
    if parts.is_empty() {
        if first(container, &MEDIA_WRAP).is_some() {
            debug!("media-only message, no text region");
        }
        None
    } else {
        Some(parts.join("\n"))
    }
}

/// Id of the replied-to message, recovered from `return GoToMessage(<id>)`.
pub fn extract_reply_to(container: ElementRef<'_>) -> Option<String> {
    let onclick = attr_of(container, &REPLY_LINK, "onclick")?;
    let trimmed = onclick.trim();

    let without_prefix = trimmed.strip_prefix(REPLY_PREFIX).unwrap_or_else(|| {
        debug!(onclick = trimmed, "reply affordance without expected prefix");
        trimmed
    });
    let id = without_prefix
        .strip_suffix(REPLY_SUFFIX)
        .unwrap_or(without_prefix);

    Some(id.to_string())
}

/// All reactions under the message, or `None` when there are no reaction
/// markers at all.
pub fn extract_reactions(container: ElementRef<'_>) -> Option<Vec<Reaction>> {
    let reactions: Vec<Reaction> = container
        .select(&REACTION)
        .map(|reaction| {
            let emoji = text_of(reaction, &REACTION_EMOJI).unwrap_or_default();
            let count = text_of(reaction, &REACTION_COUNT)
                .and_then(|raw| parse_number("reaction count", &raw))
                .unwrap_or(1);
            let from = attr_of(reaction, &REACTION_USERPIC, "title").unwrap_or_default();
            Reaction { emoji, count, from }
        })
        .collect();

    (!reactions.is_empty()).then_some(reactions)
}

/// Edit date when the edited marker exists, else `None`.
///
/// A marker without a `title` yields an empty date rather than `None`, so
/// "edited" and "has an edit date" never disagree.
pub fn extract_edited(container: ElementRef<'_>) -> Option<String> {
    let marker = first(container, &EDITED)?;
    Some(marker.value().attr("title").unwrap_or_default().to_string())
}

fn inside_forwarded(element: ElementRef<'_>, container: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != container.id())
        .filter_map(ElementRef::wrap)
        .any(|el| el.value().classes().any(|class| class == "forwarded"))
}
