//! The QR symbol encoder seam.
//!
//! Symbol construction (version selection, error-correction codewords, module
//! placement, masking) is delegated to the `qrcode` crate; this module only
//! adapts it to [`RenderOptions`] and rasterizes the result.

use crate::render::{EcLevel, ModuleGrid, OptionsError, RenderOptions};
use image::RgbImage;
use qrcode::types::QrError;
use qrcode::QrCode;
use thiserror::Error;

/// An encoded symbol together with its rasterized image.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub grid: ModuleGrid,
    pub image: RgbImage,
}

#[derive(Debug, Error)]
pub enum EncodeError {
    /// Payload does not fit in the largest symbol at the requested level.
    #[error("payload of {len} bytes is too long for a QR code at error-correction level {level}")]
    DataTooLong { len: usize, level: EcLevel },
    #[error("invalid render options: {0}")]
    InvalidOptions(#[from] OptionsError),
    #[error("QR encoder failed: {0}")]
    Encoder(String),
}

/// Turns a payload into a rendered QR symbol.
pub trait QrEncoder {
    fn encode(&self, payload: &str, options: &RenderOptions) -> Result<EncodedImage, EncodeError>;
}

/// [`QrEncoder`] backed by the `qrcode` crate. Picks the smallest version
/// (1–40) that holds the payload at the requested level.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeEncoder;

impl QrcodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn to_qrcode_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::L => qrcode::EcLevel::L,
        EcLevel::M => qrcode::EcLevel::M,
        EcLevel::Q => qrcode::EcLevel::Q,
        EcLevel::H => qrcode::EcLevel::H,
    }
}

impl QrEncoder for QrcodeEncoder {
    fn encode(&self, payload: &str, options: &RenderOptions) -> Result<EncodedImage, EncodeError> {
        options.validate()?;

        let code = QrCode::with_error_correction_level(
            payload.as_bytes(),
            to_qrcode_level(options.ec_level),
        )
        .map_err(|e| match e {
            QrError::DataTooLong => EncodeError::DataTooLong {
                len: payload.len(),
                level: options.ec_level,
            },
            other => EncodeError::Encoder(other.to_string()),
        })?;

        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        let grid = ModuleGrid::new(width, modules)
            .ok_or_else(|| EncodeError::Encoder(format!("non-square symbol of width {width}")))?;
        let image = grid.rasterize(options)?;

        tracing::debug!(
            width,
            level = %options.ec_level,
            bytes = payload.len(),
            "encoded QR symbol"
        );
        Ok(EncodedImage { grid, image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_fits_version_1() {
        let enc = QrcodeEncoder::new();
        let out = enc.encode("Hello, world!", &RenderOptions::default()).unwrap();
        assert_eq!(out.grid.width(), 21);
        assert_eq!(out.image.dimensions(), (290, 290));
    }

    #[test]
    fn longer_payload_grows_version() {
        let enc = QrcodeEncoder::new();
        let payload = "x".repeat(200);
        let out = enc.encode(&payload, &RenderOptions::default()).unwrap();
        assert!(out.grid.width() > 21);
        assert_eq!((out.grid.width() - 17) % 4, 0);
    }

    #[test]
    fn finder_pattern_corner_is_dark() {
        let enc = QrcodeEncoder::new();
        let out = enc.encode("abc", &RenderOptions::default()).unwrap();
        assert!(out.grid.is_dark(0, 0));
        assert_eq!(*out.image.get_pixel(40, 40), image::Rgb([0, 0, 0]));
        assert_eq!(*out.image.get_pixel(0, 0), image::Rgb([255, 255, 255]));
    }

    #[test]
    fn data_too_long_is_reported() {
        let enc = QrcodeEncoder::new();
        // Version 40-L holds 2953 bytes in byte mode.
        let payload = "é".repeat(2000);
        let err = enc.encode(&payload, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, EncodeError::DataTooLong { len: 4000, level: EcLevel::L }));
    }

    #[test]
    fn higher_level_reduces_capacity() {
        let enc = QrcodeEncoder::new();
        let payload = "z".repeat(1500);
        let low = RenderOptions::default();
        let high = RenderOptions {
            ec_level: EcLevel::H,
            ..RenderOptions::default()
        };
        assert!(enc.encode(&payload, &low).is_ok());
        assert!(matches!(
            enc.encode(&payload, &high),
            Err(EncodeError::DataTooLong { level: EcLevel::H, .. })
        ));
    }

    #[test]
    fn zero_module_size_is_invalid() {
        let enc = QrcodeEncoder::new();
        let opts = RenderOptions {
            module_size: 0,
            ..RenderOptions::default()
        };
        assert!(matches!(
            enc.encode("abc", &opts),
            Err(EncodeError::InvalidOptions(OptionsError::ZeroModuleSize))
        ));
    }
}
