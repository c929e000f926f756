//! Writing delivered images to disk.
//!
//! Bytes are written straight to the final path; no sibling file is created,
//! so any name the filesystem accepts can be saved. An existing file with the
//! same name is replaced (last write wins).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes `bytes` to `final_path`, truncating an existing file, and syncs it.
pub fn write_file(final_path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut f = File::create(final_path)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    tracing::debug!(path = %final_path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}
