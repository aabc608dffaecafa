//! # flagicon-gen
//!
//! Build-time generator for the `FlagIconCss` ReasonReact binding.
//!
//! ## Overview
//!
//! The [`flag-icon-css`](https://github.com/lipis/flag-icons) package ships one
//! SVG per country (`us.svg`, `gb.svg`, ...). This crate lists that directory,
//! turns each file name into a country code and generates a Reason module
//! with one component per flag plus a `make` component that dispatches on a
//! `countryCode` string:
//!
//! ```reason
//! module US = {
//!   [@react.component] [@bs.module "flag-icon-css/flags/4x3/us.svg"]
//!   external make: unit => React.element = "default";
//! };
//!
//! [@react.component]
//! let make = (~countryCode: string) => {
//!   switch (countryCode) {
//!   | "us" => <US />
//!   | _ => React.null
//!   };
//! };
//! ```
//!
//! ## Modules
//!
//! - **[`generator`]** - code derivation, syntax model, template rendering
//! - **[`config`]** - input/output paths and the optional TOML file
//! - **[`error`]** - fatal generation errors
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `flagicon-gen` command

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generator::{build, GenerationReport};
