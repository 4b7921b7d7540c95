//! Normalizer — rewrites the separator inside one string field of each record.
//!
//! The pass is pure: records go in, records come out, nothing touches the
//! filesystem. Records without the field pass through untouched; a field that
//! is present but not a string fails the whole pass.

use crate::error::{Error, SchemaViolation};
use crate::types::{json_type_name, NormalizeStats, Record, SeparatorRule};

/// Output of [`Normalizer::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub records: Vec<Record>,
    pub stats: NormalizeStats,
}

/// Applies a [`SeparatorRule`] to a sequence of records.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rule: SeparatorRule,
}

impl Normalizer {
    pub fn new(rule: SeparatorRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &SeparatorRule {
        &self.rule
    }

    /// Rewrite every record, keeping length and order.
    pub fn normalize(&self, mut records: Vec<Record>) -> Result<Normalized, Error> {
        let mut stats = NormalizeStats {
            records: records.len(),
            ..NormalizeStats::default()
        };

        for (index, record) in records.iter_mut().enumerate() {
            let replaced = self.normalize_record(index, record)?;
            if replaced > 0 {
                stats.rewritten += 1;
                stats.replacements += replaced;
            }
        }

        tracing::debug!(%stats, field = %self.rule.field, "normalized records");
        Ok(Normalized { records, stats })
    }

    /// Rewrite a single record in place. Returns the number of separators
    /// replaced; `index` is only used for error reporting.
    pub fn normalize_record(&self, index: usize, record: &mut Record) -> Result<usize, Error> {
        let Some(text) = text_field(record, &self.rule.field, index)? else {
            return Ok(0);
        };

        // An empty pattern would match between every character.
        if self.rule.separator.is_empty() {
            return Ok(0);
        }

        let count = text.matches(self.rule.separator.as_str()).count();
        if count > 0 {
            *text = text.replace(self.rule.separator.as_str(), &self.rule.replacement);
        }
        Ok(count)
    }
}

/// Normalize with the default Anki rule (`flds`, U+001F → `---`).
pub fn normalize(records: Vec<Record>) -> Result<Vec<Record>, Error> {
    Normalizer::default()
        .normalize(records)
        .map(|normalized| normalized.records)
}

/// Typed accessor for a string field.
///
/// `Ok(None)` when the key is absent, `Ok(Some(_))` for a string, and a
/// [`SchemaViolation::FieldNotString`] for any other JSON type, `null`
/// included.
pub fn text_field<'a>(
    record: &'a mut Record,
    key: &str,
    index: usize,
) -> Result<Option<&'a mut String>, Error> {
    match record.get_mut(key) {
        None => Ok(None),
        Some(serde_json::Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(SchemaViolation::FieldNotString {
            index,
            key: key.to_string(),
            found: json_type_name(other),
        }
        .into()),
    }
}
