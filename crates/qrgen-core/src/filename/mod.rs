//! Output filename derivation.
//!
//! The stem is either the caller's explicit name or a prefix of the payload,
//! both passed through [`sanitize_filename`]. Auto-derived stems are sanitized
//! first and truncated afterwards, and always come from the original payload
//! rather than the URL-normalized one.

mod sanitize;

pub use sanitize::{sanitize_filename, FALLBACK_STEM};

/// Extension of the raster format produced by the encoder.
pub const IMAGE_EXTENSION: &str = "png";

/// Prefix for stems derived from the payload.
pub const AUTO_PREFIX: &str = "QR_";

/// Maximum number of characters of the sanitized payload kept in an auto stem.
pub const AUTO_STEM_MAX_CHARS: usize = 50;

/// Derives the filename (with extension) for an encoded payload.
///
/// # Examples
///
/// - `output_filename("Hello World", Some("greeting"))` → `"greeting.png"`
/// - `output_filename("example.com", None)` → `"QR_example.com.png"`
/// - `output_filename("a/b", Some("  "))` → `"QR_a_b.png"`
pub fn output_filename(payload: &str, explicit: Option<&str>) -> String {
    let stem = match explicit.filter(|name| !name.trim().is_empty()) {
        Some(name) => sanitize_filename(name),
        None => auto_stem(payload),
    };
    format!("{stem}.{IMAGE_EXTENSION}")
}

fn auto_stem(payload: &str) -> String {
    let short: String = sanitize_filename(payload)
        .chars()
        .take(AUTO_STEM_MAX_CHARS)
        .collect();
    format!("{AUTO_PREFIX}{short}")
}
