//! Render options passed to the encoder with every payload.

use super::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// Module size bounds offered by the interactive surfaces.
pub const MODULE_SIZE_RANGE: RangeInclusive<u32> = 1..=20;
/// Border bounds offered by the interactive surfaces.
pub const BORDER_RANGE: RangeInclusive<u32> = 1..=10;

/// Largest image side (pixels) the rasterizer will allocate.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// QR error-correction level, from lowest (L, ~7%) to highest (H, ~30%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EcLevel {
    #[default]
    L,
    M,
    Q,
    H,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid error-correction level {0:?}: expected L, M, Q or H")]
pub struct EcLevelParseError(pub String);

impl FromStr for EcLevel {
    type Err = EcLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(EcLevel::L),
            "m" | "medium" => Ok(EcLevel::M),
            "q" | "quartile" => Ok(EcLevel::Q),
            "h" | "high" => Ok(EcLevel::H),
            _ => Err(EcLevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("module size must be at least 1")]
    ZeroModuleSize,
    #[error("image side of {modules} modules at {module_size}px exceeds {MAX_IMAGE_SIDE}px")]
    TooLarge { modules: u64, module_size: u32 },
}

/// How a symbol is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side length of one module in pixels.
    pub module_size: u32,
    /// Quiet zone width in modules.
    pub border: u32,
    pub foreground: Color,
    pub background: Color,
    pub ec_level: EcLevel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 4,
            foreground: Color::BLACK,
            background: Color::WHITE,
            ec_level: EcLevel::L,
        }
    }
}

impl RenderOptions {
    /// Checks the options alone (module size must be positive).
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.module_size == 0 {
            return Err(OptionsError::ZeroModuleSize);
        }
        Ok(())
    }

    /// Image side in pixels for a symbol that is `symbol_width` modules wide.
    pub fn image_side(&self, symbol_width: u32) -> Result<u32, OptionsError> {
        self.validate()?;
        let modules = u64::from(symbol_width) + 2 * u64::from(self.border);
        let side = modules.saturating_mul(u64::from(self.module_size));
        if side > u64::from(MAX_IMAGE_SIDE) {
            return Err(OptionsError::TooLarge {
                modules,
                module_size: self.module_size,
            });
        }
        Ok(side as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_settings() {
        let o = RenderOptions::default();
        assert_eq!(o.module_size, 10);
        assert_eq!(o.border, 4);
        assert_eq!(o.foreground, Color::BLACK);
        assert_eq!(o.background, Color::WHITE);
        assert_eq!(o.ec_level, EcLevel::L);
    }

    #[test]
    fn image_side_includes_border_on_both_sides() {
        let o = RenderOptions::default();
        assert_eq!(o.image_side(21), Ok((21 + 8) * 10));
        let o = RenderOptions {
            module_size: 1,
            border: 0,
            ..RenderOptions::default()
        };
        assert_eq!(o.image_side(21), Ok(21));
    }

    #[test]
    fn zero_module_size_rejected() {
        let o = RenderOptions {
            module_size: 0,
            ..RenderOptions::default()
        };
        assert_eq!(o.validate(), Err(OptionsError::ZeroModuleSize));
        assert_eq!(o.image_side(21), Err(OptionsError::ZeroModuleSize));
    }

    #[test]
    fn oversized_image_rejected() {
        let o = RenderOptions {
            module_size: u32::MAX,
            border: u32::MAX,
            ..RenderOptions::default()
        };
        assert!(matches!(o.image_side(177), Err(OptionsError::TooLarge { .. })));
    }

    #[test]
    fn ec_level_parse_and_display() {
        assert_eq!("l".parse(), Ok(EcLevel::L));
        assert_eq!("Medium".parse(), Ok(EcLevel::M));
        assert_eq!("Q".parse(), Ok(EcLevel::Q));
        assert_eq!("high".parse(), Ok(EcLevel::H));
        assert!("x".parse::<EcLevel>().is_err());
        assert_eq!(EcLevel::H.to_string(), "H");
    }
}
