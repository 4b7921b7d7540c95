//! Static record corpora used across harnesses.
//!
//! Records are shaped like rows of the Anki `notes` table as exported to
//! JSON. `flds` joins the note's fields with U+001F.

use serde_json::{json, Value};

/// Three notes with multi-field `flds` values, including non-ASCII text.
pub fn corpus_notes() -> Value {
    json!([
        {
            "id": 1_700_000_000_001_i64,
            "guid": "f#W]x8H$uP",
            "mid": 1_342_697_561_419_i64,
            "mod": 1_700_000_123,
            "usn": -1,
            "tags": " vocab ",
            "flds": "café\u{1f}coffee shop\u{1f}[sound:cafe.mp3]",
            "sfld": "café",
            "csum": 1_234_567_890,
            "flags": 0,
            "data": ""
        },
        {
            "id": 1_700_000_000_002_i64,
            "guid": "Ab9+Qz!kL0",
            "mid": 1_342_697_561_419_i64,
            "mod": 1_700_000_456,
            "usn": -1,
            "tags": "",
            "flds": "日本語\u{1f}Japanese language\u{1f}",
            "sfld": "日本語",
            "csum": 987_654_321,
            "flags": 0,
            "data": ""
        },
        {
            "id": 1_700_000_000_003_i64,
            "guid": "zz0-plain",
            "mid": 1_342_697_561_420_i64,
            "mod": 1_700_000_789,
            "usn": -1,
            "tags": " grammar ",
            "flds": "noSeparatorHere",
            "sfld": "noSeparatorHere",
            "csum": 42,
            "flags": 0,
            "data": ""
        }
    ])
}

/// Records that never carry `flds`: deck/card rows mixed into an export.
pub fn corpus_without_field() -> Value {
    json!([
        { "id": 1, "nid": 1_700_000_000_001_i64, "did": 1, "ord": 0, "type": 2 },
        { "id": 2, "name": "Default", "conf": 1, "desc": "deck\u{1f}description" },
        { "id": 3, "nested": { "flds": "inner\u{1f}value" }, "list": [1, "two", null] }
    ])
}

/// A mix of notes, non-note rows and edge-case `flds` strings.
pub fn corpus_mixed() -> Value {
    json!([
        { "id": 10, "flds": "a\u{1f}b\u{1f}c" },
        { "id": 11 },
        { "id": 12, "flds": "" },
        { "id": 13, "flds": "\u{1f}" },
        { "id": 14, "flds": "already---split" },
        { "id": 15, "flds": "trailing\u{1f}", "tags": "x\u{1f}y" }
    ])
}

/// Serialize a fixture as compact JSON text suitable for writing to disk.
pub fn to_text(value: &Value) -> String {
    serde_json::to_string(value).expect("fixtures serialize")
}

/// Write `contents` to `name` under `dir` and return the full path.
pub fn write_fixture(
    dir: &std::path::Path,
    name: &str,
    contents: &str,
) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}
