//! RGB colors as accepted on the command line and in config files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid color {input:?}: expected #rrggbb, #rgb, \"black\" or \"white\"")]
pub struct ColorParseError {
    pub input: String,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#rrggbb`, `rrggbb`, `#rgb`, `rgb`, `black` or `white` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "black" => return Ok(Color::BLACK),
            "white" => return Ok(Color::WHITE),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc expands to #aabbcc
            3 => Ok(Color::rgb(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_hex() {
        assert_eq!("#000000".parse(), Ok(Color::BLACK));
        assert_eq!("#FFFFFF".parse(), Ok(Color::WHITE));
        assert_eq!("1a2b3c".parse(), Ok(Color::rgb(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn parse_short_hex() {
        assert_eq!("#f80".parse(), Ok(Color::rgb(0xff, 0x88, 0x00)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("black".parse(), Ok(Color::BLACK));
        assert_eq!(" White ".parse(), Ok(Color::WHITE));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
        assert!("#+1+2+3".parse::<Color>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }
}
