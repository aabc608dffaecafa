//! # Generator Configuration
//!
//! Paths the generator reads from and writes to. Every field has a default
//! matching the layout of the ReasonReact bindings package, so running the
//! generator from the package root with no configuration reproduces the
//! historical output.
//!
//! ## Sources
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults ([`GeneratorConfig::default`])
//! 2. `flagicon-gen.toml` (or the file passed with `--config`)
//! 3. Environment variables `FLAGICON_FLAGS_DIR` and `FLAGICON_OUTPUT`,
//!    then command-line flags (see [`crate::cli`])
//!
//! ## Example
//!
//! ```toml
//! flags_dir = "node_modules/flag-icon-css/flags/1x1"
//! output = "src/bindings/FlagIconCss/FlagIconCssSquare.re"
//! asset_prefix = "flag-icon-css/flags/1x1"
//! sort = true
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "flagicon-gen.toml";

/// Installed flag-icon-css 4x3 asset directory, relative to the package root
pub const DEFAULT_FLAGS_DIR: &str = "node_modules/flag-icon-css/flags/4x3";

/// Generated module path, relative to the package root
pub const DEFAULT_OUTPUT: &str = "src/bindings/FlagIconCss/FlagIconCssBuild.re";

/// Module path prefix used in `[@bs.module "..."]`
pub const DEFAULT_ASSET_PREFIX: &str = "flag-icon-css/flags/4x3";

/// Inputs and outputs of one generator run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory listed for `<code>.<ext>` assets
    pub flags_dir: PathBuf,
    /// File the generated module overwrites
    pub output: PathBuf,
    /// Prefix of the asset path bound by each declaration
    pub asset_prefix: String,
    /// Sort codes instead of keeping directory-listing order
    pub sort: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            flags_dir: PathBuf::from(DEFAULT_FLAGS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            sort: false,
        }
    }
}

impl GeneratorConfig {
    /// Configuration for an explicit input directory and output file
    pub fn new(flags_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            flags_dir: flags_dir.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    fn resolve_relative_to(mut self, base: &Path) -> Self {
        if base.as_os_str().is_empty() {
            return self;
        }
        if self.flags_dir.is_relative() {
            self.flags_dir = base.join(&self.flags_dir);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}

/// Load a configuration file
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// cannot be read or parsed.
pub fn load_config_file(config_path: &Path) -> Result<Option<GeneratorConfig>, GenerateError> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path).map_err(|e| GenerateError::Config {
        path: config_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config: GeneratorConfig = toml::from_str(&contents).map_err(|e| GenerateError::Config {
        path: config_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    Ok(Some(config.resolve_relative_to(base)))
}

/// Resolve the configuration file path
///
/// Priority:
/// 1. Explicitly provided path (via CLI), whether or not it exists
/// 2. `flagicon-gen.toml` in `dir` if present
/// 3. None (defaults only)
pub fn resolve_config_path(explicit_path: Option<&Path>, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    candidate.exists().then_some(candidate)
}
