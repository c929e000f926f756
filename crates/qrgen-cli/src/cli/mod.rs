//! CLI for the qrgen QR code generator.

mod commands;
mod prompt;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use qrgen_core::config::{self, QrgenConfig};
use qrgen_core::render::{Color, EcLevel, RenderOptions};
use std::path::{Path, PathBuf};

use commands::{run_classify, run_completions, run_generate, run_interactive, run_man, run_quick};

/// Top-level CLI for qrgen.
#[derive(Debug, Parser)]
#[command(name = "qrgen")]
#[command(about = "qrgen: turn text or URLs into QR code images", long_about = None)]
pub struct Cli {
    /// Read defaults from this file instead of ~/.config/qrgen/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate a QR code from TEXT and preview, emit or save it.
    Generate(GenerateArgs),

    /// One-shot mode: ask for the text, save QR_<text>.png in the current directory, then wait.
    Quick {
        /// Text to encode instead of prompting for it.
        #[arg(long)]
        text: Option<String>,
        /// Seconds to wait before exiting (default from config, 20).
        #[arg(long, value_name = "SECS")]
        hold_secs: Option<u64>,
    },

    /// Fill in the generator form on the terminal, repeatedly, until end of input.
    Interactive {
        /// Directory for saved images (default from config, else current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Report whether TEXT looks like a URL and how it would be normalized.
    Classify {
        text: String,
    },

    /// Print shell completions to stdout.
    Completions {
        shell: Shell,
    },

    /// Print the man page to stdout.
    Man,
}

/// Options of `qrgen generate`. Unset render options come from the config file.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Text or URL to encode.
    pub text: String,

    /// Pixels per module (1-20).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=20))]
    pub module_size: Option<u32>,

    /// Quiet zone width in modules (0-10).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=10))]
    pub border: Option<u32>,

    /// Module color, e.g. "#000000".
    #[arg(long, value_name = "COLOR")]
    pub fg: Option<Color>,

    /// Background color, e.g. "#ffffff".
    #[arg(long, value_name = "COLOR")]
    pub bg: Option<Color>,

    /// Error-correction level: L, M, Q or H.
    #[arg(long, value_name = "LEVEL")]
    pub ec_level: Option<EcLevel>,

    /// Output filename without extension (default: QR_<text>).
    #[arg(short = 'o', long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Write the PNG to disk.
    #[arg(long)]
    pub save: bool,

    /// Directory for --save (default from config, else current directory).
    #[arg(long, value_name = "DIR", requires = "save")]
    pub output_dir: Option<PathBuf>,

    /// Treat the text as a URL even if it does not look like one.
    #[arg(long, conflicts_with = "no_url")]
    pub url: bool,

    /// Never treat the text as a URL.
    #[arg(long)]
    pub no_url: bool,

    /// Write the raw PNG bytes to stdout (status goes to stderr).
    #[arg(long)]
    pub stdout: bool,

    /// Do not print the terminal preview.
    #[arg(long)]
    pub no_preview: bool,
}

impl GenerateArgs {
    /// Flags override config values.
    pub fn render_options(&self, cfg: &QrgenConfig) -> RenderOptions {
        let base = cfg.render_options();
        RenderOptions {
            module_size: self.module_size.unwrap_or(base.module_size),
            border: self.border.unwrap_or(base.border),
            foreground: self.fg.unwrap_or(base.foreground),
            background: self.bg.unwrap_or(base.background),
            ec_level: self.ec_level.unwrap_or(base.ec_level),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<QrgenConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let config_path = cli.config.as_deref();

        match cli.command {
            CliCommand::Generate(args) => run_generate(&args, &load_config(config_path)?)?,
            CliCommand::Quick { text, hold_secs } => {
                let cfg = load_config(config_path)?;
                run_quick(text.as_deref(), hold_secs.unwrap_or(cfg.hold_secs))?;
            }
            CliCommand::Interactive { output_dir } => {
                let cfg = load_config(config_path)?;
                let dir = match output_dir {
                    Some(d) => d,
                    None => cfg.resolve_output_dir()?,
                };
                run_interactive(&cfg, &dir)?;
            }
            CliCommand::Classify { text } => run_classify(&text)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command())?,
            CliCommand::Man => run_man(Cli::command())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
