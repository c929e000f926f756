//! Optional user defaults loaded from `~/.config/qrgen/config.toml`.
//!
//! The file is never created; a missing file means built-in defaults.

use crate::render::{Color, EcLevel, RenderOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";

/// Global configuration. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrgenConfig {
    /// Module size in pixels.
    pub module_size: u32,
    /// Quiet zone in modules.
    pub border: u32,
    pub foreground: Color,
    pub background: Color,
    pub ec_level: EcLevel,
    /// Seconds the one-shot `quick` command waits before exiting.
    pub hold_secs: u64,
    /// Directory for saved images; None = current working directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for QrgenConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            module_size: render.module_size,
            border: render.border,
            foreground: render.foreground,
            background: render.background,
            ec_level: render.ec_level,
            hold_secs: 20,
            output_dir: None,
        }
    }
}

impl QrgenConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            module_size: self.module_size,
            border: self.border,
            foreground: self.foreground,
            background: self.background,
            ec_level: self.ec_level,
        }
    }

    /// Directory images are saved into: `output_dir`, else the current directory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("cannot determine current directory"),
        }
    }
}

/// Where the config file is looked up (it may not exist).
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrgen")?;
    Ok(xdg_dirs.get_config_file(CONFIG_FILE))
}

/// Load configuration from the XDG config dir, or defaults if there is none.
pub fn load() -> Result<QrgenConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrgen")?;
    match xdg_dirs.find_config_file(CONFIG_FILE) {
        Some(path) => load_from(&path),
        None => {
            let looked_up = config_path()?;
            tracing::debug!(path = %looked_up.display(), "no config file; using defaults");
            Ok(QrgenConfig::default())
        }
    }
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<QrgenConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: QrgenConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}
