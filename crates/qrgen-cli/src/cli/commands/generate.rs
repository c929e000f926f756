//! `qrgen generate <text>` – encode, preview, emit and optionally save.

use crate::cli::GenerateArgs;
use anyhow::Result;
use qrgen_core::config::QrgenConfig;
use qrgen_core::url_model::is_likely_url;
use qrgen_core::{generate, GenerateRequest, QrcodeEncoder};
use std::io::{self, Write};

/// URL treatment: explicit flags win, otherwise follow the classifier.
pub(crate) fn treat_as_url(text: &str, force_on: bool, force_off: bool) -> bool {
    if force_off {
        false
    } else {
        force_on || is_likely_url(text)
    }
}

pub fn run_generate(args: &GenerateArgs, cfg: &QrgenConfig) -> Result<()> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    if args.stdout {
        generate_to(args, cfg, &mut stdout.lock(), &mut stderr.lock())
    } else {
        let mut out = stdout.lock();
        let mut sink = io::sink();
        // Preview and status share stdout; `data` is unused without --stdout.
        generate_to(args, cfg, &mut sink, &mut out)
    }
}

/// `data` receives the PNG bytes when `--stdout` is set; everything else goes to `status`.
pub(crate) fn generate_to(
    args: &GenerateArgs,
    cfg: &QrgenConfig,
    data: &mut dyn Write,
    status: &mut dyn Write,
) -> Result<()> {
    let request = GenerateRequest {
        payload: args.text.clone(),
        options: args.render_options(cfg),
        treat_as_url: treat_as_url(&args.text, args.url, args.no_url),
        filename: args.filename.clone(),
    };
    tracing::debug!(?request, "generate");

    let delivery = generate(&request, &QrcodeEncoder::new())?;

    if request.treat_as_url {
        writeln!(status, "Detected URL: {}", delivery.encoded_payload)?;
    }
    if !args.no_preview && !args.stdout {
        write!(status, "{}", delivery.preview())?;
    }

    let download = delivery.download();
    if args.stdout {
        data.write_all(download.bytes)?;
        data.flush()?;
    }
    writeln!(
        status,
        "Generated {} ({}x{} px, {}, {} bytes)",
        download.filename,
        delivery.width_px,
        delivery.height_px,
        download.mime,
        download.bytes.len()
    )?;

    if args.save {
        let dir = match &args.output_dir {
            Some(d) => d.clone(),
            None => cfg.resolve_output_dir()?,
        };
        let path = delivery.save_in(&dir)?;
        writeln!(status, "Saved to {}", path.display())?;
    }
    Ok(())
}
