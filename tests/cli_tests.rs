#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Lay out a bindings package with an installed flag-icon-css 4x3 directory
fn package(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let flags = dir.path().join("node_modules/flag-icon-css/flags/4x3");
    fs::create_dir_all(&flags).unwrap();
    fs::create_dir_all(dir.path().join("src/bindings/FlagIconCss")).unwrap();
    for name in names {
        fs::write(flags.join(name), "<svg/>").unwrap();
    }
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    run_with_env(dir, args, &[])
}

fn run_with_env(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_flagicon-gen"));
    command
        .current_dir(dir)
        .env_remove("FLAGICON_FLAGS_DIR")
        .env_remove("FLAGICON_OUTPUT")
        .env("FLAGICON_LOG_LEVEL", "warn")
        .args(args);
    for (key, value) in vars {
        command.env(key, value);
    }
    command.output().expect("run cli")
}

fn toml_config(dir: &Path) {
    let flags = dir.join("square");
    fs::create_dir_all(&flags).unwrap();
    fs::write(flags.join("jp.svg"), "<svg/>").unwrap();
    fs::write(
        dir.join("flagicon-gen.toml"),
        "flags_dir = \"square\"\noutput = \"Square.re\"\nasset_prefix = \"flag-icon-css/flags/1x1\"\n",
    )
    .unwrap();
}

#[test]
fn test_cli_generate_default_paths() {
    let dir = package(&["us.svg", "gb.svg", "gb-eng.svg", "readme.md"]);
    let output = run(dir.path(), &[]);
    assert!(output.status.success());

    // Skipped entries are reported on stderr; stdout is only the success line
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    assert!(stdout.contains("Generated 2 flag components"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gb-eng.svg"));

    let generated = dir.path().join("src/bindings/FlagIconCss/FlagIconCssBuild.re");
    let content = fs::read_to_string(generated).unwrap();
    assert!(content.contains("| \"us\" => <US />"));
    assert!(content.contains("| \"gb\" => <GB />"));
}

#[test]
fn test_cli_missing_flags_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read flag directory"));
}

#[test]
fn test_cli_dry_run_prints_module() {
    let dir = package(&["fr.svg"]);
    let output = run(dir.path(), &["--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("module FR = {"));
    assert!(!dir
        .path()
        .join("src/bindings/FlagIconCss/FlagIconCssBuild.re")
        .exists());
}

#[test]
fn test_cli_deny_warnings() {
    let dir = package(&["fr.svg", "fr.png"]);

    let lenient = run(dir.path(), &[]);
    assert!(lenient.status.success());
    let stdout = String::from_utf8_lossy(&lenient.stdout);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    assert!(!stdout.contains("duplicate_code"));
    let stderr = String::from_utf8_lossy(&lenient.stderr);
    assert!(stderr.contains("[duplicate_code] fr.png"));

    let strict = run(dir.path(), &["--deny-warnings"]);
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("--deny-warnings"));
}

#[test]
fn test_cli_explicit_paths() {
    let dir = package(&[]);
    let flags = dir.path().join("assets");
    fs::create_dir_all(&flags).unwrap();
    fs::write(flags.join("de.svg"), "<svg/>").unwrap();

    let output = run(
        dir.path(),
        &[
            "--flags-dir",
            "assets",
            "--output",
            "Flags.re",
            "--asset-prefix",
            "./assets",
        ],
    );
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join("Flags.re")).unwrap();
    assert!(content.contains("[@bs.module \"./assets/de.svg\"]"));
}

#[test]
fn test_cli_config_file() {
    let dir = package(&[]);
    toml_config(dir.path());

    let output = run(dir.path(), &[]);
    assert!(output.status.success());

    let content = fs::read_to_string(dir.path().join("Square.re")).unwrap();
    assert!(content.contains("[@bs.module \"flag-icon-css/flags/1x1/jp.svg\"]"));
}

#[test]
fn test_cli_env_overrides_config_file() {
    let dir = package(&[]);
    toml_config(dir.path());

    let output = run_with_env(dir.path(), &[], &[("FLAGICON_OUTPUT", "FromEnv.re")]);
    assert!(output.status.success());

    assert!(dir.path().join("FromEnv.re").exists());
    assert!(!dir.path().join("Square.re").exists());
    // Keys the environment does not set still come from the file
    let content = fs::read_to_string(dir.path().join("FromEnv.re")).unwrap();
    assert!(content.contains("[@bs.module \"flag-icon-css/flags/1x1/jp.svg\"]"));
}

#[test]
fn test_cli_flag_overrides_env() {
    let dir = package(&[]);
    toml_config(dir.path());

    let output = run_with_env(
        dir.path(),
        &["--output", "FromFlag.re"],
        &[("FLAGICON_OUTPUT", "FromEnv.re")],
    );
    assert!(output.status.success());

    assert!(dir.path().join("FromFlag.re").exists());
    assert!(!dir.path().join("FromEnv.re").exists());
}
