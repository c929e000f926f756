//! Encode & deliver: the single generate action.
//!
//! Runs `Idle → Validating → Normalizing → Encoding → Serializing → Delivering → Done`
//! once, with no retries. A failure in `Validating` or `Encoding` ends the run
//! before anything is produced; disk persistence is a separate, optional step
//! on the returned [`Delivery`].

mod delivery;
mod error;

pub use delivery::{Delivery, Download};
pub use error::GenerateError;

use crate::encoder::QrEncoder;
use crate::filename::output_filename;
use crate::render::{serialize_png, RenderOptions};
use crate::url_model::normalize_url;
use std::fmt;

/// Pipeline stages of one generate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Validating,
    Normalizing,
    Encoding,
    Serializing,
    Delivering,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Idle => "idle",
            Stage::Validating => "validating",
            Stage::Normalizing => "normalizing",
            Stage::Encoding => "encoding",
            Stage::Serializing => "serializing",
            Stage::Delivering => "delivering",
            Stage::Done => "done",
        };
        f.write_str(s)
    }
}

/// Everything the surfaces collect for one action. Rebuilt on every trigger.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub payload: String,
    pub options: RenderOptions,
    /// Prefix a scheme before encoding (see [`normalize_url`]).
    pub treat_as_url: bool,
    /// Explicit filename stem; blank means derive one from the payload.
    pub filename: Option<String>,
}

impl GenerateRequest {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn treat_as_url(mut self, yes: bool) -> Self {
        self.treat_as_url = yes;
        self
    }

    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }
}

fn enter(stage: Stage) {
    tracing::debug!(%stage, "generate stage");
}

/// Encodes `request.payload` with `encoder` and returns the serialized image.
///
/// The filename is always derived from the payload as typed, even when the
/// encoded text is the normalized URL.
pub fn generate<E: QrEncoder + ?Sized>(
    request: &GenerateRequest,
    encoder: &E,
) -> Result<Delivery, GenerateError> {
    enter(Stage::Idle);
    enter(Stage::Validating);
    if request.payload.trim().is_empty() {
        tracing::warn!("generate rejected: empty input");
        return Err(GenerateError::EmptyInput);
    }

    enter(Stage::Normalizing);
    let working = if request.treat_as_url {
        normalize_url(&request.payload)
    } else {
        request.payload.clone()
    };

    enter(Stage::Encoding);
    let encoded = encoder.encode(&working, &request.options).map_err(|e| {
        tracing::warn!("encoding failed: {}", e);
        GenerateError::from(e)
    })?;
    let filename = output_filename(&request.payload, request.filename.as_deref());

    enter(Stage::Serializing);
    let png = serialize_png(&encoded.image)?;

    enter(Stage::Delivering);
    let (width_px, height_px) = encoded.image.dimensions();
    let delivery = Delivery {
        encoded_payload: working,
        filename,
        png,
        grid: encoded.grid,
        width_px,
        height_px,
    };

    enter(Stage::Done);
    tracing::info!(
        filename = %delivery.filename,
        bytes = delivery.png.len(),
        "generated QR code"
    );
    Ok(delivery)
}
