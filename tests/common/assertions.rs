//! Domain-specific assertion macros for cardprep harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! record broke which rewrite invariant.

/// Assert that a record's `flds` equals an expected string.
///
/// ```rust
/// assert_flds!(records[0], "a---b---c");
/// ```
#[macro_export]
macro_rules! assert_flds {
    ($record:expr, $expected:expr) => {{
        let record: &cardprep::Record = &$record;
        let expected: &str = $expected;
        match record.get("flds") {
            Some(serde_json::Value::String(actual)) => {
                pretty_assertions::assert_eq!(actual.as_str(), expected, "flds mismatch");
            }
            Some(other) => panic!("assert_flds! failed: flds is not a string: {other}"),
            None => panic!(
                "assert_flds! failed: no flds key.\n  Available keys: {:?}",
                record.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that no `flds` value in `records` still contains U+001F.
#[macro_export]
macro_rules! assert_no_separator {
    ($records:expr) => {{
        for (index, record) in $records.iter().enumerate() {
            if let Some(serde_json::Value::String(flds)) = record.get("flds") {
                if flds.contains('\u{1f}') {
                    panic!("assert_no_separator! failed: record {index} flds = {flds:?}");
                }
            }
        }
    }};
}

/// Assert that output records line up with input records: same length, and
/// each output record differs from its input at most in `flds`.
#[macro_export]
macro_rules! assert_aligned {
    ($input:expr, $output:expr) => {{
        let input: &[cardprep::Record] = &$input;
        let output: &[cardprep::Record] = &$output;
        pretty_assertions::assert_eq!(input.len(), output.len(), "record count changed");
        for (index, (before, after)) in input.iter().zip(output).enumerate() {
            let keys_before: Vec<&String> = before.keys().collect();
            let keys_after: Vec<&String> = after.keys().collect();
            pretty_assertions::assert_eq!(keys_before, keys_after, "record {index}: keys changed");
            for (key, value) in before {
                if key != "flds" {
                    pretty_assertions::assert_eq!(
                        Some(value),
                        after.get(key),
                        "record {index}: {key:?} changed"
                    );
                }
            }
        }
    }};
}
