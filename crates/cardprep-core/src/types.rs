//! Core types for cardprep-core.
//!
//! This module defines the data shared across the crate: the semi-structured
//! [`Record`], the [`SeparatorRule`] that describes the rewrite, and the
//! [`NormalizeStats`] counters reported after a pass.

/// One element of the top-level JSON array.
///
/// No schema is enforced beyond "is an object". Key order is preserved from
/// input to output.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Key of the Anki note field list.
pub const FIELD_KEY: &str = "flds";

/// Anki joins the fields of a note with the ASCII unit separator.
pub const UNIT_SEPARATOR: &str = "\u{1f}";

/// Visible delimiter that replaces [`UNIT_SEPARATOR`].
pub const DELIMITER: &str = "---";

/// Which string field to rewrite, and what to rewrite inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorRule {
    /// Record key whose string value is rewritten.
    pub field: String,
    /// Substring to search for. Never empty.
    pub separator: String,
    /// Substring written in place of every `separator` occurrence.
    pub replacement: String,
}

impl SeparatorRule {
    pub fn new(
        field: impl Into<String>,
        separator: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            separator: separator.into(),
            replacement: replacement.into(),
        }
    }
}

impl Default for SeparatorRule {
    fn default() -> Self {
        Self::new(FIELD_KEY, UNIT_SEPARATOR, DELIMITER)
    }
}

/// Counters collected during a normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Records seen.
    pub records: usize,
    /// Records whose field value actually changed.
    pub rewritten: usize,
    /// Separator occurrences replaced across all records.
    pub replacements: usize,
}

impl std::fmt::Display for NormalizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records, {} rewritten, {} separators replaced",
            self.records, self.rewritten, self.replacements
        )
    }
}

/// Human-readable name of a JSON value's type, used in error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
