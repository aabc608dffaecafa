#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for CLI argument handling

use crate::cli::Cli;
use crate::config::{DEFAULT_ASSET_PREFIX, DEFAULT_CONFIG_FILE};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[test]
fn test_no_arguments() {
    let cli = Cli::try_parse_from(["flagicon-gen"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.asset_prefix.is_none());
    assert!(!cli.sort);
    assert!(!cli.dry_run);
    assert!(!cli.deny_warnings);
    assert!(!cli.verbose);
}

#[test]
fn test_all_flags_parse() {
    let cli = Cli::try_parse_from([
        "flagicon-gen",
        "--flags-dir",
        "assets/4x3",
        "--output",
        "out/Flags.re",
        "--asset-prefix",
        "assets/4x3",
        "--config",
        "gen.toml",
        "--sort",
        "--dry-run",
        "--deny-warnings",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.flags_dir, Some(PathBuf::from("assets/4x3")));
    assert_eq!(cli.output, Some(PathBuf::from("out/Flags.re")));
    assert_eq!(cli.asset_prefix.as_deref(), Some("assets/4x3"));
    assert_eq!(cli.config, Some(PathBuf::from("gen.toml")));
    assert!(cli.sort && cli.dry_run && cli.deny_warnings && cli.verbose);
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["flagicon-gen", "--watch"]).is_err());
}

#[test]
fn test_resolve_config_flags_override_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "flags_dir = \"from_file\"\noutput = \"File.re\"\n",
    )
    .unwrap();

    let cli = Cli::try_parse_from(["flagicon-gen", "--output", "/tmp/Cli.re", "--sort"]).unwrap();
    let config = cli.resolve_config(dir.path()).unwrap();

    assert_eq!(config.flags_dir, dir.path().join("from_file"));
    assert_eq!(config.output, PathBuf::from("/tmp/Cli.re"));
    assert_eq!(config.asset_prefix, DEFAULT_ASSET_PREFIX);
    assert!(config.sort);
}

#[test]
fn test_resolve_config_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let cli = Cli::try_parse_from(["flagicon-gen", "--config", missing.to_str().unwrap()]).unwrap();

    let err = cli.resolve_config(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}
