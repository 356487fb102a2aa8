//! Text normalisation — raw HTML (or any fetched body) to clean plain text.
//!
//! Two explicit paths: a structured parse that collects the document
//! body's text, and a tag-strip fallback for input the parser cannot get
//! anything out of. Both collapse whitespace runs to single spaces and
//! trim. [`normalise`] never panics and has no side effects.

use scraper::{Html, Selector};

/// Normalize a fetched body to collapsed, trimmed plain text.
///
/// Empty or whitespace-only input returns an empty string. The structured
/// path is tried first; when it yields nothing, the tag-strip fallback
/// runs silently. Idempotent on already-clean text.
pub fn normalise(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    let text = match structured_text(html) {
        Some(text) => text,
        None => strip_tags(html),
    };
    collapse_whitespace(&text)
}

/// Parse as HTML and collect the body's text content.
///
/// The parser is error-recovering, so "failure" here means it produced no
/// extractable text at all — the signal to fall back to [`strip_tags`].
fn structured_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").ok()?;
    let body = document.select(&selector).next()?;
    let text: String = body.text().collect::<Vec<_>>().join(" ");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Drop every `<...>` span from the input, keeping everything else.
///
/// An unterminated tag at the end of input is kept literally, matching
/// what a `<[^>]*>` substitution would do.
fn strip_tags(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        result.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(offset) => {
                rest = &rest[start + offset + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// Collapse all whitespace runs to a single space and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters, at a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_owned(),
        None => text.to_owned(),
    }
}
