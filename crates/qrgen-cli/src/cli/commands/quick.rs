//! `qrgen quick` – one-shot mode: prompt once, save with fixed defaults, hold, exit.

use crate::cli::prompt::Prompter;
use anyhow::{Context, Result};
use qrgen_core::hold::{Hold, Pause, ThreadSleep};
use qrgen_core::{generate, GenerateRequest, QrcodeEncoder};
use std::io::{self, BufRead, Write};
use std::path::Path;

const PROMPT: &str = "Enter the text or URL to convert to a QR code";

pub fn run_quick(text: Option<&str>, hold_secs: u64) -> Result<()> {
    let dir = std::env::current_dir().context("cannot determine current directory")?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    quick_with(
        text,
        &mut prompter,
        &dir,
        Hold::from_secs(hold_secs),
        &ThreadSleep,
    )
}

/// The whole one-shot flow against injectable input, output, directory and pause.
pub(crate) fn quick_with<R: BufRead, W: Write>(
    text: Option<&str>,
    prompter: &mut Prompter<R, W>,
    dir: &Path,
    hold: Hold,
    pauser: &dyn Pause,
) -> Result<()> {
    let payload = match text {
        Some(t) => t.to_string(),
        None => prompter.line(PROMPT)?.unwrap_or_default(),
    };

    // Fixed defaults: 10px modules, 4-module border, black on white, level L.
    let request = GenerateRequest::new(payload);
    let delivery = generate(&request, &QrcodeEncoder::new())?;
    let path = delivery.save_in(dir)?;

    let out = prompter.output();
    writeln!(out, "Output saved as {}", path.display())?;
    if !hold.is_noop() {
        writeln!(out, "Quitting in {} seconds", hold.duration.as_secs())?;
    }
    out.flush()?;
    hold.run(pauser);
    Ok(())
}
