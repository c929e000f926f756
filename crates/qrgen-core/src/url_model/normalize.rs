//! Scheme normalization.

use super::classify::has_scheme;
use super::DEFAULT_SCHEME_PREFIX;

/// Ensures the trimmed `text` carries a URI scheme, prepending `https://` when
/// it has none.
///
/// Empty input stays empty. Text that already has a scheme is returned trimmed
/// but otherwise untouched, so the function is idempotent. No URL validation
/// happens here.
pub fn normalize_url(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || has_scheme(trimmed) {
        return trimmed.to_string();
    }
    format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
}
