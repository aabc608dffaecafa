//! # Generator Module
//!
//! Generates the ReasonReact `FlagIconCss` component from the installed
//! `flag-icon-css` asset directory.
//!
//! ## Overview
//!
//! For every `<code>.<ext>` asset with a code of at most two characters the
//! generated module contains:
//! - **Component declaration** - `module US = { ... }` binding the asset
//! - **Dispatch case** - `| "us" => <US />` in the `make` switch
//!
//! Unmatched codes render `React.null`.
//!
//! ## Architecture
//!
//! ```text
//! read_dir → codes::extract_codes → model::FlagModule → templates (Askama) → atomic write
//! ```
//!
//! 1. **Listing** - [`list_flag_files`] reads the directory in listing order
//! 2. **Codes** - [`derive_code`] keeps the text before the first `.`
//! 3. **Model** - [`FlagModule::from_codes`] builds declarations and cases
//!    and rejects duplicate module names
//! 4. **Rendering** - [`render_flag_module`] applies `templates/flag_icon.re.txt`
//! 5. **Writing** - [`write_atomic`] writes a temp sibling and renames it
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flagicon_gen::config::GeneratorConfig;
//! use flagicon_gen::generator::build;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = build(&GeneratorConfig::default())?;
//! println!("{} flags, {} skipped", report.codes.len(), report.warning_count());
//! # Ok(())
//! # }
//! ```

mod codes;
mod model;
mod project;
mod report;
mod templates;

pub use codes::*;
pub use model::*;
pub use project::*;
pub use report::*;
pub use templates::*;
