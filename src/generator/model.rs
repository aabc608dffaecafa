use std::collections::HashMap;

use super::codes::DerivedCode;
use super::report::{GenerationWarning, WarningKind};

/// A `module XX = { ... }` binding for one flag asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDeclaration {
    /// Generated component name (uppercased code)
    pub module_name: String,
    /// Asset module path, e.g. `flag-icon-css/flags/4x3/us.svg`
    pub asset_path: String,
}

impl ComponentDeclaration {
    /// Asset path as the contents of a string literal
    pub fn asset_literal(&self) -> String {
        escape_string_literal(&self.asset_path)
    }
}

/// One `| "xx" => <XX />` branch of the dispatch switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchCase {
    /// Country code matched by string equality
    pub code: String,
    /// Declaration this case renders
    pub module_name: String,
}

impl DispatchCase {
    /// Code as the contents of a string literal
    pub fn code_literal(&self) -> String {
        escape_string_literal(&self.code)
    }
}

/// Syntax model of the generated flag component
///
/// Declarations and cases are parallel: entry `i` of `cases` renders entry
/// `i` of `declarations`, and module names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagModule {
    /// Component declarations in emission order
    pub declarations: Vec<ComponentDeclaration>,
    /// Dispatch cases in emission order
    pub cases: Vec<DispatchCase>,
}

impl FlagModule {
    /// Build the model from bare codes, keeping their order
    ///
    /// Each code stands in for its own file name in duplicate warnings.
    pub fn from_codes<S: AsRef<str>>(
        codes: &[S],
        asset_prefix: &str,
    ) -> (Self, Vec<GenerationWarning>) {
        let entries: Vec<DerivedCode> = codes
            .iter()
            .map(|code| DerivedCode {
                code: code.as_ref().to_string(),
                file_name: code.as_ref().to_string(),
            })
            .collect();
        Self::from_entries(&entries, asset_prefix)
    }

    /// Build the model from derived codes, keeping their order
    ///
    /// An entry whose module name is already declared is skipped and reported
    /// as [`WarningKind::DuplicateCode`] against its file name; the first
    /// occurrence wins.
    pub fn from_entries(
        entries: &[DerivedCode],
        asset_prefix: &str,
    ) -> (Self, Vec<GenerationWarning>) {
        let prefix = asset_prefix.trim_end_matches('/');
        let mut declared_by: HashMap<String, &str> = HashMap::new();
        let mut module = FlagModule::default();
        let mut warnings = Vec::new();

        for entry in entries {
            let code = entry.code.as_str();
            let module_name = module_name_for(code);
            if let Some(first) = declared_by.get(&module_name) {
                warnings.push(GenerationWarning::new(
                    entry.file_name.as_str(),
                    WarningKind::DuplicateCode,
                    format!("module `{module_name}` is already declared by `{first}`"),
                ));
                continue;
            }
            declared_by.insert(module_name.clone(), &entry.file_name);

            let asset_path = if prefix.is_empty() {
                format!("{code}.svg")
            } else {
                format!("{prefix}/{code}.svg")
            };
            module.declarations.push(ComponentDeclaration {
                module_name: module_name.clone(),
                asset_path,
            });
            module.cases.push(DispatchCase {
                code: code.to_string(),
                module_name,
            });
        }

        (module, warnings)
    }

    /// Number of flags in the module
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the dispatch function only has its fallback branch
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Codes in emission order
    pub fn codes(&self) -> Vec<String> {
        self.cases.iter().map(|c| c.code.clone()).collect()
    }
}

/// Component name for a country code (`us` → `US`)
pub fn module_name_for(code: &str) -> String {
    code.to_uppercase()
}

/// Escape text for use inside a double-quoted string literal
pub fn escape_string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
