//! CSS selectors for the exporter's structural markers.
//!
//! Every lookup the parser performs goes through one of these. They match on
//! tag, class and attribute only, so reformatted or re-indented exports
//! produce the same records.

use std::sync::LazyLock;

use scraper::Selector;

fn compile(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|err| panic!("invalid static selector {css:?}: {err:?}"))
}

macro_rules! selectors {
    ($($(#[$meta:meta])* $name:ident = $css:literal;)+) => {
        $(
            $(#[$meta])*
            pub static $name: LazyLock<Selector> = LazyLock::new(|| compile($css));
        )+

        #[cfg(test)]
        pub(crate) fn force_all() {
            $( LazyLock::force(&$name); )+
        }
    };
}

selectors! {
    /// One chat entry, regular or service.
    MESSAGE = "div.message";
    /// Body of a service message.
    SERVICE_BODY = "div.body.details";
    DATE = "div.date";
    FROM_NAME = "div.from_name";
    /// Wrapper of forwarded content; its `from_name` is the original author.
    FORWARDED = "div.forwarded";
    TEXT = "div.text";
    MEDIA_WRAP = "div.media_wrap";

    PHOTO_LINK = "a.photo_wrap";
    PHOTO_IMAGE = "img.photo";

    VIDEO_LINK = "a.video_file_wrap";
    VIDEO_THUMB = "img.video_file";
    VIDEO_DURATION = "div.video_duration";

    VOICE_LINK = "a.media_voice_message";
    VOICE_STATUS = "div.status.details";

    STICKER_LINK = r#"a[href^="stickers/"][href$=".webp"]"#;
    ANIMATED_STICKER_LINK = r#"a[href^="stickers/"][href$=".tgs"]"#;

    DOCUMENT_LINK = "a.media_document";
    DOCUMENT_SIZE = "div.file_size";
    DOCUMENT_MIME = "div.mime_type";

    REPLY_LINK = r#"a[onclick^="return GoToMessage"]"#;

    REACTION = "span.reaction";
    REACTION_EMOJI = "span.emoji";
    REACTION_COUNT = "span.count";
    REACTION_USERPIC = "div.userpic";

    EDITED = "div.edited";

    /// Chat title in the page header.
    PAGE_TITLE = "div.page_header div.text";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_compile() {
        force_all();
    }
}
