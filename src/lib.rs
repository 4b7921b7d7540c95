//! cardprep — rewrite unit separators in an Anki card export.
//!
//! Reads `card3start.json` (a JSON array of note records), replaces every
//! U+001F inside each record's `flds` string with `---`, and writes the result
//! to `cards3end.json` with 4-space indentation so the fields can later be
//! split as CSV.
//!
//! The record model, normalizer and file I/O live in `cardprep-core` and are
//! re-exported here so integration tests can import everything from one place.

pub mod pipeline;

pub use cardprep_core::{config, error, normalizer, store, types};
pub use cardprep_core::{normalize, Error, NormalizeStats, Normalizer, Record, SchemaViolation};
