//! Result of a successful generate action.

use super::GenerateError;
use crate::render::{ModuleGrid, PNG_MIME};
use crate::storage;
use std::path::{Path, PathBuf};

/// Serialized PNG plus everything needed to preview, download or save it.
///
/// Every consumer reads the same `png` buffer, so a saved file is
/// byte-for-byte the downloaded one.
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Text that was actually encoded (normalized when treated as a URL).
    pub encoded_payload: String,
    /// Output filename including the `.png` extension.
    pub filename: String,
    pub png: Vec<u8>,
    pub grid: ModuleGrid,
    pub width_px: u32,
    pub height_px: u32,
}

/// A download action: what a browser-style "save as" needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download<'a> {
    pub filename: &'a str,
    pub mime: &'static str,
    pub bytes: &'a [u8],
}

impl Delivery {
    pub fn mime(&self) -> &'static str {
        PNG_MIME
    }

    pub fn download(&self) -> Download<'_> {
        Download {
            filename: &self.filename,
            mime: PNG_MIME,
            bytes: &self.png,
        }
    }

    /// Terminal rendering of the symbol with a 2-module margin.
    pub fn preview(&self) -> String {
        self.grid.to_terminal_string(2)
    }

    /// Path the image would be saved to inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.filename)
    }

    /// Writes the PNG bytes to `dir/<filename>` and returns the path.
    ///
    /// Failure leaves `self` untouched; preview and download remain usable.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf, GenerateError> {
        let path = self.path_in(dir);
        storage::write_file(&path, &self.png).map_err(|source| GenerateError::FileWrite {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = self.png.len(), "saved QR code");
        Ok(path)
    }
}
