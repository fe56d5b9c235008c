//! Common types used throughout relay-window
//!
//! Records are opaque to the pagination core. The only thing it ever asks of
//! a record is the string form of a named field, which is what the
//! [`Record`] trait provides.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Record
// ============================================================================

/// Field lookup by name, as used by cursor encoding
///
/// Returns `None` when the record has no such field. Cursor encoding renders
/// a missing field as an empty segment, so implementations should not invent
/// placeholder values.
pub trait Record {
    /// String representation of the named field
    fn field(&self, name: &str) -> Option<String>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

impl Record for JsonValue {
    fn field(&self, name: &str) -> Option<String> {
        match self {
            Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

impl Record for JsonObject {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(json_field_string)
    }
}

impl Record for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Render a JSON field value the way it appears inside a cursor
///
/// Strings are used verbatim (no quotes); scalars use their JSON text;
/// arrays and objects are rendered as compact JSON.
pub fn json_field_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for String to treat empty strings as absent
pub trait StringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl StringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}
