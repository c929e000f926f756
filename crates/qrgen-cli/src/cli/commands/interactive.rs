//! `qrgen interactive` – the generator form, one prompt per field.
//!
//! Each round rebuilds the request from scratch. Warnings and errors end the
//! round only; the form is shown again until end of input.

use crate::cli::prompt::Prompter;
use anyhow::Result;
use qrgen_core::config::QrgenConfig;
use qrgen_core::render::{Color, RenderOptions, BORDER_RANGE, MODULE_SIZE_RANGE};
use qrgen_core::url_model::is_likely_url;
use qrgen_core::{generate, GenerateError, GenerateRequest, QrEncoder, QrcodeEncoder};
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::path::Path;

/// Form values for one round.
struct Form {
    request: GenerateRequest,
    save_to_disk: bool,
}

/// How a round ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Generated { saved: bool },
    Warning,
    Failed,
}

pub fn run_interactive(cfg: &QrgenConfig, dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    writeln!(
        prompter.output(),
        "QR Code Generator. Enter text or a URL; end input (Ctrl-D) to quit."
    )?;
    let outcomes = interactive_with(&mut prompter, cfg, dir, &QrcodeEncoder::new())?;
    tracing::info!(rounds = outcomes.len(), "interactive session finished");
    Ok(())
}

pub(crate) fn interactive_with<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cfg: &QrgenConfig,
    dir: &Path,
    encoder: &dyn QrEncoder,
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    while let Some(form) = read_form(prompter, &cfg.render_options())? {
        let outcome = submit(prompter.output(), &form, dir, encoder)?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn in_range(range: RangeInclusive<u32>) -> impl Fn(&u32) -> Result<(), String> {
    move |v| {
        if range.contains(v) {
            Ok(())
        } else {
            Err(format!(
                "must be between {} and {}",
                range.start(),
                range.end()
            ))
        }
    }
}

fn any_color(_: &Color) -> Result<(), String> {
    Ok(())
}

/// Reads one filled-in form; `None` when input ends part-way.
fn read_form<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    defaults: &RenderOptions,
) -> Result<Option<Form>> {
    let Some(text) = p.line("Text / URL")? else {
        return Ok(None);
    };
    let Some(module_size) = p.value("Box size", defaults.module_size, in_range(MODULE_SIZE_RANGE))?
    else {
        return Ok(None);
    };
    // A zero border from the config file is outside the form's range.
    let border_default = defaults.border.clamp(*BORDER_RANGE.start(), *BORDER_RANGE.end());
    let Some(border) = p.value("Border", border_default, in_range(BORDER_RANGE))? else {
        return Ok(None);
    };
    let Some(save_to_disk) = p.confirm("Save to disk", false)? else {
        return Ok(None);
    };
    let Some(foreground) = p.value("Fill color", defaults.foreground, any_color)? else {
        return Ok(None);
    };
    let Some(background) = p.value("Background color", defaults.background, any_color)? else {
        return Ok(None);
    };
    let Some(filename) = p.line("Filename (optional, without extension)")? else {
        return Ok(None);
    };
    let treat_as_url = if is_likely_url(&text) {
        match p.confirm("Treat input as URL", true)? {
            Some(yes) => yes,
            None => return Ok(None),
        }
    } else {
        false
    };

    let options = RenderOptions {
        module_size,
        border,
        foreground,
        background,
        ec_level: defaults.ec_level,
    };
    let request = GenerateRequest {
        payload: text,
        options,
        treat_as_url,
        filename: Some(filename),
    };
    Ok(Some(Form {
        request,
        save_to_disk,
    }))
}

fn submit(
    out: &mut dyn Write,
    form: &Form,
    dir: &Path,
    encoder: &dyn QrEncoder,
) -> Result<Outcome> {
    let delivery = match generate(&form.request, encoder) {
        Ok(d) => d,
        Err(e) if e.is_user_input() => {
            writeln!(out, "Warning: {e}.")?;
            return Ok(Outcome::Warning);
        }
        Err(e) => {
            tracing::warn!(stage = %e.stage(), "generate failed: {}", e);
            writeln!(out, "Error: {e}")?;
            return Ok(Outcome::Failed);
        }
    };

    if form.request.treat_as_url {
        writeln!(out, "Detected URL: {}", delivery.encoded_payload)?;
    }
    write!(out, "{}", delivery.preview())?;
    let download = delivery.download();
    writeln!(
        out,
        "Download: {} ({}, {} bytes)",
        download.filename,
        download.mime,
        download.bytes.len()
    )?;

    if !form.save_to_disk {
        return Ok(Outcome::Generated { saved: false });
    }
    match delivery.save_in(dir) {
        Ok(path) => {
            writeln!(out, "Saved to {}", path.display())?;
            Ok(Outcome::Generated { saved: true })
        }
        Err(e @ GenerateError::FileWrite { .. }) => {
            writeln!(out, "Error: {e}")?;
            Ok(Outcome::Generated { saved: false })
        }
        Err(e) => Err(e.into()),
    }
}
