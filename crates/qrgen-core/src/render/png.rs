//! In-memory PNG serialization.

use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// MIME type of the bytes produced by [`serialize_png`].
pub const PNG_MIME: &str = "image/png";

/// Encodes `image` as PNG into a fresh buffer.
pub fn serialize_png(image: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
