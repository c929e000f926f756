//! qrgen core: turn text or URLs into QR code PNGs.
//!
//! - [`url_model`]: URL-likeness detection and scheme normalization.
//! - [`filename`]: filename sanitization and output name derivation.
//! - [`render`]: render options, colors, rasterization, PNG serialization.
//! - [`encoder`]: the QR symbol encoder seam and its `qrcode`-backed implementation.
//! - [`generate`]: the encode & deliver action.

pub mod config;
pub mod encoder;
pub mod filename;
pub mod generate;
pub mod hold;
pub mod logging;
pub mod render;
pub mod storage;
pub mod url_model;

pub use encoder::{EncodeError, EncodedImage, QrEncoder, QrcodeEncoder};
pub use generate::{generate, Delivery, GenerateError, GenerateRequest, Stage};
