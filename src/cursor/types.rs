//! Cursor and key specification types

use super::codec::CursorCodec;
use crate::types::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace used when a key specification does not name one
pub const DEFAULT_CURSOR_NAME: &str = "cursor";

fn default_cursor_name() -> String {
    DEFAULT_CURSOR_NAME.to_string()
}

// ============================================================================
// KeySpec
// ============================================================================

/// Named, ordered set of fields that determine a record's cursor identity
///
/// `fields` must uniquely identify a record among all records paginated
/// under the same `name`; otherwise two records share a cursor and the
/// `after`/`before` matching becomes ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySpec {
    /// Cursor namespace (keeps cursors of different connections apart)
    #[serde(default = "default_cursor_name")]
    pub name: String,

    /// Record fields composing the cursor, in order
    #[serde(alias = "key")]
    pub fields: Vec<String>,
}

impl KeySpec {
    /// Create a key specification
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a key specification under the default `cursor` namespace
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(DEFAULT_CURSOR_NAME, fields)
    }

    /// Encode the cursor for a record under this key specification
    pub fn cursor<R: Record + ?Sized>(&self, record: &R) -> Cursor {
        CursorCodec::encode(self, record)
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Opaque, deterministic identifier of a record's position
///
/// The empty cursor is used as the boundary marker of an empty collection
/// and never matches a real record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap an already-encoded token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The encoded token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty cursor
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the encoded token
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Cursor {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Cursor {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}

impl PartialEq<str> for Cursor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Cursor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
