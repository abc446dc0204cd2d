//! HTML output helpers shared by block renderers.
//!
//! Everything interpolated into markup goes through one of these:
//! - `html_escape`: attribute values and plain text
//! - `sanitize_label`: rich link text, inline formatting only
//! - `safe_href`: link destinations, rejects script-capable schemes
//! - `safe_css_value`: single CSS values placed in a `style` attribute

use std::sync::LazyLock;

use tracing::warn;

/// Schemes allowed for absolute link destinations.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Inline tags kept in menu labels.
const LABEL_TAGS: &[&str] = &[
    "b", "strong", "em", "i", "s", "sub", "sup", "code", "mark", "span", "br",
];

static LABEL_SANITIZER: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::empty();
    builder
        .add_tags(LABEL_TAGS)
        .add_clean_content_tags(&["script", "style"]);
    builder
});

/// Escape the five HTML-significant characters.
///
/// Used for every attribute value the menu writes: classes, styles, `href`
/// and `title`.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Sanitize a menu label, keeping only inline formatting tags.
pub fn sanitize_label(input: &str) -> String {
    LABEL_SANITIZER.clean(input).to_string()
}

/// Validate a link destination.
///
/// Relative references pass through. Absolute URLs must use one of the
/// allowed schemes; anything else yields `None`.
pub fn safe_href(destination: &str) -> Option<&str> {
    let trimmed = destination.trim();
    match url::Url::parse(trimmed) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => Some(trimmed),
        Ok(parsed) => {
            warn!(scheme = %parsed.scheme(), "dropping link with disallowed scheme");
            None
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => Some(trimmed),
        Err(e) => {
            warn!(error = %e, "dropping unparseable link destination");
            None
        }
    }
}

/// Validate a single CSS value (a color) for use inside `style="..."`.
///
/// Values that could terminate the declaration or smuggle in another
/// construct are rejected.
pub fn safe_css_value(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_ascii_lowercase();
    let has_control = trimmed
        .chars()
        .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\') || c.is_control());

    if has_control || lowered.contains("url(") || lowered.contains("expression(") {
        warn!(value = %trimmed, "dropping unsafe CSS value");
        return None;
    }

    Some(trimmed)
}
