use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::{load_config_file, resolve_config_path, GeneratorConfig};
use crate::generator::{build, build_dry_run, print_report};
use crate::logging::{init_logging_with_config, LogConfig};

/// Command-line interface for the flag icon generator
///
/// With no arguments, regenerates `FlagIconCssBuild.re` from the installed
/// `flag-icon-css` package using the default paths.
#[derive(Parser, Debug)]
#[command(name = "flagicon-gen")]
#[command(about = "Generate the FlagIconCss ReasonReact component", long_about = None)]
pub struct Cli {
    /// Directory containing the `<code>.svg` flag assets
    #[arg(long, env = "FLAGICON_FLAGS_DIR")]
    pub flags_dir: Option<PathBuf>,

    /// Generated module path (overwritten on every run)
    #[arg(short, long, env = "FLAGICON_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Module path prefix for `[@bs.module "<prefix>/<code>.svg"]`
    #[arg(long)]
    pub asset_prefix: Option<String>,

    /// Configuration file (default: ./flagicon-gen.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sort country codes instead of keeping directory order
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Print the generated module to stdout without writing it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Exit with an error if any entry was dropped or duplicated
    #[arg(long, default_value_t = false)]
    pub deny_warnings: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Merge the configuration file (if any) with command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `--config` file does not exist or any
    /// configuration file fails to parse.
    pub fn resolve_config(&self, cwd: &Path) -> anyhow::Result<GeneratorConfig> {
        let mut config = match resolve_config_path(self.config.as_deref(), cwd) {
            Some(path) => load_config_file(&path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(dir) = &self.flags_dir {
            config.flags_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(prefix) = &self.asset_prefix {
            config.asset_prefix = prefix.clone();
        }
        config.sort |= self.sort;
        Ok(config)
    }
}

/// Parse arguments, initialise logging and run the generator
///
/// # Errors
///
/// Returns an error if logging cannot be initialised or [`run`] fails
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config.log_level = "debug".to_string();
    }
    init_logging_with_config(&log_config)?;

    run(&cli)
}

/// Execute one generator run for already-parsed arguments
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be resolved
/// - The flag directory cannot be read
/// - The output file cannot be written
/// - `--deny-warnings` is set and any entry was dropped
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = cli.resolve_config(&cwd)?;

    let report = if cli.dry_run {
        let (report, rendered) = build_dry_run(&config)?;
        print!("{rendered}");
        print_report(&report);
        report
    } else {
        let report = build(&config)
            .with_context(|| format!("Failed to generate {}", config.output.display()))?;
        print_report(&report);
        println!(
            "✅ Generated {} flag components → {}",
            report.codes.len(),
            report.output.display()
        );
        report
    };

    if cli.deny_warnings && report.warning_count() > 0 {
        anyhow::bail!(
            "{} directory entr{} dropped or duplicated (--deny-warnings)",
            report.warning_count(),
            if report.warning_count() == 1 { "y was" } else { "ies were" }
        );
    }
    Ok(())
}
