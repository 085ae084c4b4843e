//! Plain-text rendering of exported HTML fragments.

use scraper::{ElementRef, Node};

/// Elements that start and end their own line when rendered.
const BLOCK_ELEMENTS: &[&str] = &[
    "div", "p", "blockquote", "pre", "li", "ul", "ol", "tr", "table", "h1", "h2", "h3", "h4",
    "h5", "h6",
];

/// Renders an element's text the way a browser would show it, minus styling.
///
/// - runs of whitespace (including source newlines) collapse to one space
/// - `<br>` starts a new line
/// - block elements (`div`, `p`, `blockquote`, ...) sit on lines of their own
/// - every line is trimmed, and leading/trailing blank lines are dropped
pub fn render_text(element: ElementRef<'_>) -> String {
    let mut lines = vec![String::new()];
    collect_lines(element, &mut lines);

    let lines: Vec<String> = lines.iter().map(|line| collapse_whitespace(line)).collect();

    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    match (first, last) {
        (Some(first), Some(last)) => lines[first..=last].join("\n"),
        _ => String::new(),
    }
}

/// Rendered text on a single line: line and block breaks become spaces.
///
/// Used for fields that are one value, such as a sender name or the caption
/// of a sticker link.
pub fn flat_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&render_text(element))
}

fn collect_lines(element: ElementRef<'_>, lines: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if let Some(line) = lines.last_mut() {
                    line.push_str(text);
                }
            }
            Node::Element(el) if el.name() == "br" => lines.push(String::new()),
            Node::Element(el) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let block = BLOCK_ELEMENTS.contains(&el.name());
                if block {
                    end_line(lines);
                }
                collect_lines(child, lines);
                if block {
                    end_line(lines);
                }
            }
            _ => {}
        }
    }
}

/// Starts a new line unless the current one has no visible text yet.
fn end_line(lines: &mut Vec<String>) {
    if lines.last().is_some_and(|line| !line.trim().is_empty()) {
        lines.push(String::new());
    }
}

/// Text of the element's direct text children only, collapsed.
///
/// Skips nested elements, e.g. the `<span class="details">` date inside a
/// forwarded message's sender line.
pub fn own_text(element: ElementRef<'_>) -> String {
    let raw: String = element
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .collect();
    collapse_whitespace(&raw)
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
