//! Tests for the generate subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["qrgen", "generate", "https://example.com"]) {
        CliCommand::Generate(a) => {
            assert_eq!(a.text, "https://example.com");
            assert!(a.module_size.is_none());
            assert!(a.border.is_none());
            assert!(a.fg.is_none());
            assert!(a.bg.is_none());
            assert!(a.ec_level.is_none());
            assert!(a.filename.is_none());
            assert!(!a.save);
            assert!(a.output_dir.is_none());
            assert!(!a.url);
            assert!(!a.no_url);
            assert!(!a.stdout);
            assert!(!a.no_preview);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_all_options() {
    match parse(&[
        "qrgen",
        "generate",
        "Hello World",
        "--module-size",
        "20",
        "--border",
        "1",
        "--fg",
        "#123456",
        "--bg",
        "white",
        "--ec-level",
        "Q",
        "-o",
        "greeting",
        "--save",
        "--output-dir",
        "/tmp",
        "--no-url",
        "--no-preview",
    ]) {
        CliCommand::Generate(a) => {
            assert_eq!(a.text, "Hello World");
            assert_eq!(a.module_size, Some(20));
            assert_eq!(a.border, Some(1));
            assert_eq!(a.fg.map(|c| c.to_string()).as_deref(), Some("#123456"));
            assert_eq!(a.bg.map(|c| c.to_string()).as_deref(), Some("#ffffff"));
            assert_eq!(a.ec_level.map(|l| l.to_string()).as_deref(), Some("Q"));
            assert_eq!(a.filename.as_deref(), Some("greeting"));
            assert!(a.save);
            assert_eq!(a.output_dir.as_deref(), Some(std::path::Path::new("/tmp")));
            assert!(a.no_url);
            assert!(a.no_preview);
        }
        _ => panic!("expected Generate with options"),
    }
}

#[test]
fn cli_rejects_module_size_out_of_range() {
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--module-size", "0"]).is_err());
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--module-size", "21"]).is_err());
}

#[test]
fn cli_rejects_border_out_of_range() {
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--border", "11"]).is_err());
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--border", "0"]).is_ok());
}

#[test]
fn cli_rejects_bad_color_and_level() {
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--fg", "purple"]).is_err());
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--ec-level", "Z"]).is_err());
}

#[test]
fn cli_url_flags_conflict() {
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--url", "--no-url"]).is_err());
}

#[test]
fn cli_output_dir_requires_save() {
    assert!(Cli::try_parse_from(["qrgen", "generate", "x", "--output-dir", "/tmp"]).is_err());
}

#[test]
fn cli_global_config_flag() {
    let cli = Cli::try_parse_from(["qrgen", "generate", "x", "--config", "/etc/qrgen.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/etc/qrgen.toml")));
}
