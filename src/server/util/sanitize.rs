//! Free-text hardening for user supplied content.
//!
//! Text is HTML-escaped, then `javascript:` schemes and inline event handler
//! assignments such as `onclick=` are removed.

use once_cell::sync::Lazy;
use regex::Regex;

static JAVASCRIPT_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("valid javascript scheme regex"));
static EVENT_HANDLER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bon\w+\s*=").expect("valid event handler regex"));

/// Escapes HTML-significant characters and strips script injection patterns.
pub fn sanitize_text(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }

    strip_event_handlers(&strip_javascript_scheme(&escaped))
}

/// Sanitizes an optional field, keeping `None` as is.
pub fn sanitize_opt(input: Option<String>) -> Option<String> {
    input.map(|text| sanitize_text(&text))
}

fn strip_javascript_scheme(input: &str) -> String {
    JAVASCRIPT_SCHEME_RE.replace_all(input, "").into_owned()
}

fn strip_event_handlers(input: &str) -> String {
    EVENT_HANDLER_RE.replace_all(input, "").into_owned()
}
