use std::fmt;
use std::path::PathBuf;

/// Why a directory entry was dropped or flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// Entry name has no `.` so no code can be derived
    NoDelimiter,
    /// Text before the first `.` is longer than two characters
    CodeTooLong,
    /// Entry name starts with `.` (e.g. `.DS_Store`)
    EmptyCode,
    /// Uppercased code would not be a valid module name
    InvalidIdentifier,
    /// Entry name is not valid UTF-8
    NonUtf8Name,
    /// Code maps to a module name that is already declared
    DuplicateCode,
}

impl WarningKind {
    /// Stable snake_case name, used in log fields and the printed report
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningKind::NoDelimiter => "no_delimiter",
            WarningKind::CodeTooLong => "code_too_long",
            WarningKind::EmptyCode => "empty_code",
            WarningKind::InvalidIdentifier => "invalid_identifier",
            WarningKind::NonUtf8Name => "non_utf8_name",
            WarningKind::DuplicateCode => "duplicate_code",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem found while turning directory entries into codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationWarning {
    /// Directory entry the warning is about (lossy for non UTF-8 names)
    pub location: String,
    /// Warning category
    pub kind: WarningKind,
    /// Human-readable description
    pub message: String,
}

impl GenerationWarning {
    /// Create a new warning
    pub fn new(location: impl Into<String>, kind: WarningKind, message: impl Into<String>) -> Self {
        GenerationWarning {
            location: location.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Outcome of one generator run
///
/// The generator never fails on malformed entries; it records them here and
/// leaves the failure policy to the caller.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Output file the module was (or would have been) written to
    pub output: PathBuf,
    /// Retained codes in emission order
    pub codes: Vec<String>,
    /// Everything that was dropped or flagged
    pub warnings: Vec<GenerationWarning>,
    /// `false` for dry runs
    pub written: bool,
}

impl GenerationReport {
    /// Total number of warnings
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Number of warnings of one kind
    pub fn count_of(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// Whether any entry produced a duplicate declaration
    pub fn has_duplicates(&self) -> bool {
        self.count_of(WarningKind::DuplicateCode) > 0
    }
}

/// Print a grouped summary of the warnings to stderr
///
/// Stdout stays reserved for the success line and dry-run output.
pub fn print_report(report: &GenerationReport) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("\n📋 Skipped entries:");
    eprintln!(
        "   {} flag(s) generated, {} warning(s)\n",
        report.codes.len(),
        report.warning_count()
    );

    let duplicates: Vec<_> = report
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::DuplicateCode)
        .collect();
    let others: Vec<_> = report
        .warnings
        .iter()
        .filter(|w| w.kind != WarningKind::DuplicateCode)
        .collect();

    if !duplicates.is_empty() {
        eprintln!("❌ Duplicates (first occurrence kept):");
        for warning in &duplicates {
            eprintln!("   [{}] {}", warning.kind, warning.location);
            eprintln!("      {}", warning.message);
        }
        eprintln!();
    }

    if !others.is_empty() {
        eprintln!("⚠️  Dropped:");
        for warning in &others {
            eprintln!("   [{}] {}", warning.kind, warning.location);
            eprintln!("      {}", warning.message);
        }
        eprintln!();
    }
}
