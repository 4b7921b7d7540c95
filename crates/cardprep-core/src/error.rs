//! Error taxonomy for loading, rewriting and saving records.
//!
//! Every variant is fatal: the run stops at the first one and no output file
//! is produced.

use std::path::PathBuf;

/// Errors surfaced by [`store`](crate::store) and
/// [`normalizer`](crate::normalizer).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path does not exist.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other failure opening, reading or writing a file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is well-formed but not shaped like a record array.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaViolation),

    /// Records could not be serialized back to JSON.
    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Ways a document can fail the record-array shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("top-level value must be an array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index} must be an object, found {found}")]
    RecordNotObject { index: usize, found: &'static str },

    #[error("record {index}: field {key:?} must be a string, found {found}")]
    FieldNotString {
        index: usize,
        key: String,
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The schema violation behind this error, if any.
    pub fn schema_violation(&self) -> Option<&SchemaViolation> {
        match self {
            Error::Schema(violation) => Some(violation),
            _ => None,
        }
    }
}
