use askama::Template;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use super::model::{ComponentDeclaration, DispatchCase, FlagModule};
use crate::error::GenerateError;

/// Template data for the generated ReasonReact flag component
#[derive(Template)]
#[template(path = "flag_icon.re.txt", escape = "none")]
pub struct FlagModuleTemplate<'a> {
    /// `module XX = { ... }` bindings, one per flag
    pub declarations: &'a [ComponentDeclaration],
    /// Switch branches, one per flag
    pub cases: &'a [DispatchCase],
}

/// Render the flag module to source text
///
/// The result always ends with a newline, so two renders of the same model
/// are byte-identical.
///
/// # Errors
///
/// Returns an error if template rendering fails
pub fn render_flag_module(module: &FlagModule) -> Result<String, GenerateError> {
    let mut rendered = FlagModuleTemplate {
        declarations: &module.declarations,
        cases: &module.cases,
    }
    .render()?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Temporary sibling used while writing `path`
pub fn temp_path_for(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_string_lossy();
    Some(path.with_file_name(format!(".{name}.tmp")))
}

/// Overwrite `path` with `contents` atomically
///
/// Writes a hidden sibling file first and renames it over the target, so an
/// interrupted run leaves the previous output in place. The parent directory
/// must already exist.
///
/// # Errors
///
/// Returns [`GenerateError::WriteOutput`] if the temporary file cannot be
/// written or renamed. The temporary file is removed on either failure.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let temp = temp_path_for(path).ok_or_else(|| GenerateError::WriteOutput {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name"),
    })?;

    write_via_temp(path, &temp, |temp| fs::write(temp, contents))
}

/// Run `write` against `temp`, then rename `temp` over `path`
///
/// `temp` is removed whenever either step fails, so no partial file is left
/// next to the output.
pub(crate) fn write_via_temp<F>(path: &Path, temp: &Path, write: F) -> Result<(), GenerateError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    if let Err(source) = write(temp) {
        fs::remove_file(temp).ok();
        return Err(GenerateError::WriteOutput {
            path: temp.to_path_buf(),
            source,
        });
    }

    if let Err(source) = fs::rename(temp, path) {
        fs::remove_file(temp).ok();
        return Err(GenerateError::WriteOutput {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Render `module` and write it to `path`
///
/// # Errors
///
/// Returns an error if rendering or writing fails
pub fn write_flag_module(path: &Path, module: &FlagModule) -> Result<String, GenerateError> {
    let rendered = render_flag_module(module)?;
    write_atomic(path, &rendered)?;
    info!(path = %path.display(), flags = module.len(), bytes = rendered.len(), "wrote flag module");
    Ok(rendered)
}
