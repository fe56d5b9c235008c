//! Record collections
//!
//! A connection field either resolves to an array itself or is read from the
//! parent object under the field's name.

use crate::error::{Error, Result, ResultExt};
use crate::types::JsonValue;
use std::fs;
use std::path::Path;

/// Pick the ordered records out of a JSON document
///
/// Without a field the document must be an array. With a field the
/// document must be an object whose entry under `field` is an array; a
/// missing or `null` entry yields an empty collection.
pub fn resolve_collection(document: JsonValue, field: Option<&str>) -> Result<Vec<JsonValue>> {
    let value = match (document, field) {
        (JsonValue::Object(mut parent), Some(field)) => {
            parent.remove(field).unwrap_or(JsonValue::Null)
        }
        (JsonValue::Array(items), None) => return Ok(items),
        (_, Some(field)) => {
            return Err(Error::invalid_collection(format!(
                "cannot read field '{field}' from a non-object document"
            )))
        }
        (_, None) => {
            return Err(Error::invalid_collection(
                "document is not an array (use a field to select one)",
            ))
        }
    };

    match value {
        JsonValue::Array(items) => Ok(items),
        JsonValue::Null => Ok(Vec::new()),
        _ => Err(Error::invalid_collection(format!(
            "field '{}' is not an array",
            field.unwrap_or_default()
        ))),
    }
}

/// Read a JSON document from disk
pub fn load_document(path: impl AsRef<Path>) -> Result<JsonValue> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file '{}'", path.display()))
}

/// Read a JSON document from disk and resolve its collection
pub fn load_collection(path: impl AsRef<Path>, field: Option<&str>) -> Result<Vec<JsonValue>> {
    resolve_collection(load_document(path)?, field)
}
