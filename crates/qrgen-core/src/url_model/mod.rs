//! URL detection and normalization for user-supplied payloads.
//!
//! Classification is advisory: callers use [`is_likely_url`] to decide whether
//! to offer URL treatment, and [`normalize_url`] only when that treatment is
//! chosen. Neither function fails; both trim their input first.

mod classify;
mod normalize;

pub use classify::{has_scheme, is_likely_url};
pub use normalize::normalize_url;

/// Scheme prepended by [`normalize_url`] when the input has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";
