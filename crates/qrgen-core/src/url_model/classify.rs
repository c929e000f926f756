//! Heuristic "does this look like a URL or domain" check.

use regex::Regex;
use std::sync::LazyLock;

/// `<letter>[letter|digit|+|-|.]*://` at the start of the text.
static SCHEME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://").expect("scheme prefix pattern is valid")
});

/// Bare domain with an alphabetic top-level label and an optional path.
static BARE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.\-]+\.[a-zA-Z]{2,}(/.*)?$").expect("bare domain pattern is valid")
});

/// Returns true if `text` (already trimmed) starts with an explicit URI scheme.
pub fn has_scheme(text: &str) -> bool {
    SCHEME_PREFIX.is_match(text)
}

/// Returns true if `text` resembles a URL or a bare domain.
///
/// Leading/trailing whitespace is ignored. Empty input is never a URL.
///
/// # Examples
///
/// - `is_likely_url("https://example.com")` → `true`
/// - `is_likely_url("example.com/path")` → `true`
/// - `is_likely_url("Hello World")` → `false`
pub fn is_likely_url(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    has_scheme(trimmed) || BARE_DOMAIN.is_match(trimmed)
}
