use super::report::{GenerationWarning, WarningKind};

/// Delimiter separating the country code from the file extension(s)
pub const CODE_DELIMITER: char = '.';

/// Longest code kept; longer stems (`readme`, `un-flag`) are not country flags
pub const MAX_CODE_LEN: usize = 2;

/// Derive a country code from an asset file name
///
/// The code is the text before the first `.`, so `us.svg` and `us.min.svg`
/// both give `us`. The stem is kept verbatim since it is also the asset path.
///
/// # Errors
///
/// Returns the warning describing why the entry is not a usable flag.
pub fn derive_code(file_name: &str) -> Result<&str, GenerationWarning> {
    let Some((code, _ext)) = file_name.split_once(CODE_DELIMITER) else {
        return Err(GenerationWarning::new(
            file_name,
            WarningKind::NoDelimiter,
            "file name has no extension",
        ));
    };

    if code.is_empty() {
        return Err(GenerationWarning::new(
            file_name,
            WarningKind::EmptyCode,
            "file name starts with the extension delimiter",
        ));
    }

    let len = code.chars().count();
    if len > MAX_CODE_LEN {
        return Err(GenerationWarning::new(
            file_name,
            WarningKind::CodeTooLong,
            format!("code `{code}` has {len} characters, at most {MAX_CODE_LEN} allowed"),
        ));
    }

    if !is_valid_code(code) {
        return Err(GenerationWarning::new(
            file_name,
            WarningKind::InvalidIdentifier,
            format!("`{}` is not a valid module name", code.to_uppercase()),
        ));
    }

    Ok(code)
}

/// A code must start with an ASCII letter and contain only ASCII alphanumerics
pub fn is_valid_code(code: &str) -> bool {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// A retained country code and the asset it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedCode {
    /// Country code, e.g. `us`
    pub code: String,
    /// Directory entry the code came from, e.g. `us.svg`
    pub file_name: String,
}

/// Filter a listing of file names down to country codes, keeping input order
///
/// Rejected names are returned as warnings. Duplicates are not detected here;
/// see [`FlagModule::from_entries`](super::FlagModule::from_entries).
pub fn extract_codes<I, S>(names: I) -> (Vec<DerivedCode>, Vec<GenerationWarning>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes = Vec::new();
    let mut warnings = Vec::new();
    for name in names {
        let name = name.as_ref();
        match derive_code(name) {
            Ok(code) => codes.push(DerivedCode {
                code: code.to_string(),
                file_name: name.to_string(),
            }),
            Err(warning) => warnings.push(warning),
        }
    }
    (codes, warnings)
}
