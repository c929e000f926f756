//! Errors surfaced by a generate action.

use super::Stage;
use crate::encoder::EncodeError;
use crate::render::EcLevel;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single generate action. The caller stays usable for the next one.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Payload was empty or whitespace-only; nothing was encoded.
    #[error("please enter some text or a URL to generate a QR code")]
    EmptyInput,
    /// Payload exceeds the symbol capacity at the chosen level. Never truncated.
    #[error("payload of {len} bytes does not fit in a QR code at error-correction level {level}")]
    EncodingCapacity { len: usize, level: EcLevel },
    /// Any other encoder failure, including invalid render options.
    #[error(transparent)]
    Encode(EncodeError),
    #[error("failed to serialize PNG: {0}")]
    Serialize(#[from] image::ImageError),
    /// Persisting to disk failed. The in-memory delivery is still valid.
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Pipeline stage the run stopped in.
    pub fn stage(&self) -> Stage {
        match self {
            GenerateError::EmptyInput => Stage::Validating,
            GenerateError::EncodingCapacity { .. } | GenerateError::Encode(_) => Stage::Encoding,
            GenerateError::Serialize(_) => Stage::Serializing,
            GenerateError::FileWrite { .. } => Stage::Delivering,
        }
    }

    /// Input problems the user can fix by editing the form (warnings, not failures).
    pub fn is_user_input(&self) -> bool {
        matches!(self, GenerateError::EmptyInput)
    }
}

impl From<EncodeError> for GenerateError {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::DataTooLong { len, level } => GenerateError::EncodingCapacity { len, level },
            other => GenerateError::Encode(other),
        }
    }
}
