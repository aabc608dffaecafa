//! # CLI Module
//!
//! Command-line interface for the `flagicon-gen` binary.
//!
//! ## Usage
//!
//! Run from the bindings package root after `npm install`:
//!
//! ```bash
//! flagicon-gen
//! ```
//!
//! Options:
//! - `--flags-dir <DIR>` - Flag asset directory (env: `FLAGICON_FLAGS_DIR`)
//! - `--output <FILE>` - Generated module path (env: `FLAGICON_OUTPUT`)
//! - `--asset-prefix <PREFIX>` - Asset module path prefix
//! - `--config <FILE>` - TOML configuration file
//! - `--sort` - Sort codes alphabetically
//! - `--dry-run` - Print the module instead of writing it
//! - `--deny-warnings` - Fail if any entry was dropped or duplicated
//!
//! ## Examples
//!
//! ```bash
//! # Square flags into a separate module
//! flagicon-gen \
//!     --flags-dir node_modules/flag-icon-css/flags/1x1 \
//!     --asset-prefix flag-icon-css/flags/1x1 \
//!     --output src/bindings/FlagIconCss/FlagIconCssSquare.re
//!
//! # CI check: preview and fail on unexpected assets
//! flagicon-gen --dry-run --deny-warnings > /dev/null
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run, run_cli, Cli};
