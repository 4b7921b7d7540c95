//! Store — loads the record array from disk and writes it back.
//!
//! Reads go through a scoped `File` handle; writes go to a temporary file in
//! the destination directory that is only persisted over the target once the
//! whole document has been serialized and flushed. A failed save therefore
//! never leaves a partial or clobbered output file behind.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::{Error, SchemaViolation};
use crate::types::{json_type_name, Record};

/// Indentation width used by the Anki export rewrite.
pub const DEFAULT_INDENT: usize = 4;

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Read and shape-check the record array at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>, Error> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(path, source),
    })?;

    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            Error::io(path, std::io::Error::from(source))
        } else {
            Error::Parse {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records = records_from_value(value)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Check that `value` is an array of objects and unwrap it.
pub fn records_from_value(value: Value) -> Result<Vec<Record>, Error> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::from(SchemaViolation::NotAnArray {
                found: json_type_name(&other),
            }))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(Error::from(SchemaViolation::RecordNotObject {
                index,
                found: json_type_name(&other),
            })),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Serialize
// ---------------------------------------------------------------------------

/// Serialize `records` as indented JSON. Non-ASCII is written literally and
/// no trailing newline is added.
pub fn write_pretty<W: Write>(
    writer: W,
    records: &[Record],
    indent: usize,
) -> Result<(), serde_json::Error> {
    let indent = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)
}

/// [`write_pretty`] into a `String`.
pub fn to_pretty_string(records: &[Record], indent: usize) -> Result<String, Error> {
    let mut buffer = Vec::new();
    write_pretty(&mut buffer, records, indent).map_err(Error::Serialize)?;
    // serde_json only ever emits valid UTF-8.
    String::from_utf8(buffer).map_err(|err| Error::Serialize(serde_json::Error::custom(err)))
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

/// Atomically write `records` to `path`, creating or replacing it.
pub fn save_records(path: &Path, records: &[Record], indent: usize) -> Result<(), Error> {
    let dir = parent_dir(path);
    let mut staged = staging_file(&dir, path).map_err(|e| Error::io(&dir, e))?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        write_pretty(&mut writer, records, indent).map_err(|source| {
            if source.is_io() {
                Error::io(path, std::io::Error::from(source))
            } else {
                Error::Serialize(source)
            }
        })?;
        writer.flush().map_err(|e| Error::io(path, e))?;
    }

    staged
        .persist(path)
        .map_err(|e| Error::io(path, e.error))?;

    tracing::debug!(path = %path.display(), records = records.len(), "saved records");
    Ok(())
}

/// Temporary file next to `target` whose mode matches what a plain create
/// would give: the existing target's mode, or 0666 under the umask.
fn staging_file(dir: &Path, target: &Path) -> std::io::Result<tempfile::NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".cardprep-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;

    if let Ok(existing) = std::fs::metadata(target) {
        staged.as_file().set_permissions(existing.permissions())?;
    }
    Ok(staged)
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
