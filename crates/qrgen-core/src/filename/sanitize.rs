//! Portable filename sanitization.

/// Characters that are not allowed in Windows filenames (and `/` on Unix).
const RESERVED: [char; 9] = ['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Stem used when sanitizing leaves nothing behind.
pub const FALLBACK_STEM: &str = "QR";

/// Sanitizes arbitrary text into a string usable as a filename component.
///
/// - Replaces each of `\ / * ? : " < > |` with `_`
/// - Trims leading/trailing whitespace
/// - Falls back to `"QR"` when the result is empty
///
/// No length limit is applied; callers truncate when they need to.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect();

    let trimmed = replaced.trim();
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}
