use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::codes::extract_codes;
use super::model::FlagModule;
use super::report::{GenerationReport, GenerationWarning, WarningKind};
use super::templates::{render_flag_module, write_flag_module};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;

/// List the file names in the flag directory, in listing order
///
/// Subdirectories are skipped. Names that are not valid UTF-8 are returned as
/// warnings instead of names.
///
/// # Errors
///
/// Returns [`GenerateError::ReadFlagsDir`] if the directory cannot be listed.
pub fn list_flag_files(dir: &Path) -> Result<(Vec<String>, Vec<GenerationWarning>), GenerateError> {
    let read_err = |source| GenerateError::ReadFlagsDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    let mut warnings = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            debug!(entry = ?entry.file_name(), "skipping subdirectory");
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => warnings.push(non_utf8_warning(&raw)),
        }
    }
    Ok((names, warnings))
}

fn non_utf8_warning(raw: &OsString) -> GenerationWarning {
    GenerationWarning::new(
        raw.to_string_lossy(),
        WarningKind::NonUtf8Name,
        "file name is not valid UTF-8",
    )
}

/// Build the syntax model for a listing of file names
///
/// Pure counterpart of [`build`]: derives codes, optionally sorts them and
/// removes duplicates. Returns the model with every warning raised on the way.
pub fn plan_flag_module<S: AsRef<str>>(
    names: &[S],
    config: &GeneratorConfig,
) -> (FlagModule, Vec<GenerationWarning>) {
    let (mut codes, mut warnings) = extract_codes(names);
    if config.sort {
        codes.sort_by(|a, b| a.code.cmp(&b.code));
    }
    let (module, duplicates) = FlagModule::from_entries(&codes, &config.asset_prefix);
    warnings.extend(duplicates);
    (module, warnings)
}

fn collect(config: &GeneratorConfig) -> Result<(FlagModule, Vec<GenerationWarning>), GenerateError> {
    info!(dir = %config.flags_dir.display(), "reading flag assets");
    let (names, mut warnings) = list_flag_files(&config.flags_dir)?;
    let (module, planned) = plan_flag_module(&names, config);
    warnings.extend(planned);

    for warning in &warnings {
        debug!(entry = %warning.location, kind = %warning.kind, "{}", warning.message);
    }
    if !warnings.is_empty() {
        warn!(count = warnings.len(), "skipped flag assets");
    }
    for case in &module.cases {
        debug!(code = %case.code, module = %case.module_name, "flag");
    }
    Ok((module, warnings))
}

/// Generate the flag component and overwrite the configured output file
///
/// # Errors
///
/// Returns an error if the flag directory cannot be listed, the template
/// fails to render, or the output cannot be written. Dropped entries are not
/// errors; they are returned in [`GenerationReport::warnings`].
pub fn build(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    let (module, warnings) = collect(config)?;
    write_flag_module(&config.output, &module)?;
    Ok(GenerationReport {
        output: config.output.clone(),
        codes: module.codes(),
        warnings,
        written: true,
    })
}

/// Generate the flag component without touching the output file
///
/// # Errors
///
/// Returns an error if the flag directory cannot be listed or the template
/// fails to render.
pub fn build_dry_run(config: &GeneratorConfig) -> Result<(GenerationReport, String), GenerateError> {
    let (module, warnings) = collect(config)?;
    let rendered = render_flag_module(&module)?;
    let report = GenerationReport {
        output: config.output.clone(),
        codes: module.codes(),
        warnings,
        written: false,
    };
    Ok((report, rendered))
}
