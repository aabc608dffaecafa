//! Error type returned by the flag module generator.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal generation error
///
/// `ReadFlagsDir` and `WriteOutput` are the filesystem failures. Dropped or
/// suspicious directory entries are never errors; they are reported as
/// [`GenerationWarning`](crate::generator::GenerationWarning)s instead.
#[derive(Debug)]
pub enum GenerateError {
    /// The flag asset directory is missing or unreadable
    ///
    /// Usually means the `flag-icon-css` package has not been installed.
    ReadFlagsDir {
        /// Directory that was listed
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// The generated module could not be written to its output path
    WriteOutput {
        /// Output file (or its temporary sibling)
        path: PathBuf,
        /// Underlying I/O failure
        source: io::Error,
    },
    /// The Askama template failed to render
    Render(askama::Error),
    /// A configuration file exists but could not be read or parsed
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Reason reported by the reader or TOML parser
        message: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::ReadFlagsDir { path, .. } => {
                write!(
                    f,
                    "failed to read flag directory {}. \
                    Is flag-icon-css installed (npm install)?",
                    path.display()
                )
            }
            GenerateError::WriteOutput { path, .. } => {
                write!(f, "failed to write generated module {}", path.display())
            }
            GenerateError::Render(_) => write!(f, "failed to render flag module template"),
            GenerateError::Config { path, message } => {
                write!(f, "invalid configuration {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::ReadFlagsDir { source, .. } => Some(source),
            GenerateError::WriteOutput { source, .. } => Some(source),
            GenerateError::Render(err) => Some(err),
            GenerateError::Config { .. } => None,
        }
    }
}

impl From<askama::Error> for GenerateError {
    fn from(err: askama::Error) -> Self {
        GenerateError::Render(err)
    }
}

impl GenerateError {
    /// Whether this is a filesystem failure (read or write)
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            GenerateError::ReadFlagsDir { .. } | GenerateError::WriteOutput { .. }
        )
    }
}
