//! Render options and raster output for encoded symbols.

mod color;
mod grid;
mod options;
mod png;

pub use color::{Color, ColorParseError};
pub use grid::ModuleGrid;
pub use options::{
    EcLevel, EcLevelParseError, OptionsError, RenderOptions, BORDER_RANGE, MAX_IMAGE_SIDE,
    MODULE_SIZE_RANGE,
};
pub use png::{serialize_png, PNG_MIME};
