//! Pagination types
//!
//! Arguments, page info and the connection returned to callers.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::types::StringExt;
use crate::window::Edge;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Arguments
// ============================================================================

/// Relay pagination arguments
///
/// `first`/`last` of zero behave exactly like absent ones: no truncation.
/// Empty `after`/`before` cursors behave like absent ones: no filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationArgs {
    /// Keep at most this many edges from the start of the range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<usize>,

    /// Only records strictly after the record with this cursor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// Keep at most this many edges from the end of the range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<usize>,

    /// Only records strictly before the record with this cursor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl PaginationArgs {
    /// Names of the connection arguments, in the order they are declared on a field
    pub const ARGUMENT_NAMES: [&'static str; 4] = ["after", "first", "before", "last"];

    /// Create empty arguments (the whole collection)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `first`
    #[must_use]
    pub fn with_first(mut self, first: usize) -> Self {
        self.first = Some(first);
        self
    }

    /// Set `after`
    #[must_use]
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Set `last`
    #[must_use]
    pub fn with_last(mut self, last: usize) -> Self {
        self.last = Some(last);
        self
    }

    /// Set `before`
    #[must_use]
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// `first` if it truncates anything
    pub fn first_limit(&self) -> Option<usize> {
        self.first.filter(|n| *n > 0)
    }

    /// `last` if it truncates anything
    pub fn last_limit(&self) -> Option<usize> {
        self.last.filter(|n| *n > 0)
    }

    /// `after` if it filters anything
    pub fn after_cursor(&self) -> Option<&str> {
        self.after.as_deref().filter(|c| !c.is_empty())
    }

    /// `before` if it filters anything
    pub fn before_cursor(&self) -> Option<&str> {
        self.before.as_deref().filter(|c| !c.is_empty())
    }

    /// Read arguments from a field's parameter object
    ///
    /// Absent and `null` entries are treated as not given. Negative or
    /// non-integer limits and non-string cursors are rejected.
    pub fn from_params(params: &Value) -> Result<Self> {
        let map = match params {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(Error::invalid_argument(
                    "params",
                    format!("expected an object, got {}", json_type_name(other)),
                ))
            }
        };

        Ok(Self {
            first: parse_limit("first", map.get("first"))?,
            after: parse_cursor("after", map.get("after"))?,
            last: parse_limit("last", map.get("last"))?,
            before: parse_cursor("before", map.get("before"))?,
        })
    }
}

fn parse_limit(argument: &str, value: Option<&Value>) -> Result<Option<usize>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(limit) = n.as_u64() {
                usize::try_from(limit)
                    .map(Some)
                    .map_err(|_| Error::invalid_argument(argument, format!("{limit} is too large")))
            } else if n.as_i64().is_some() {
                Err(Error::invalid_argument(
                    argument,
                    format!("must be non-negative, got {n}"),
                ))
            } else {
                Err(Error::invalid_argument(
                    argument,
                    format!("must be an integer, got {n}"),
                ))
            }
        }
        Some(other) => Err(Error::invalid_argument(
            argument,
            format!("must be an integer, got {}", json_type_name(other)),
        )),
    }
}

fn parse_cursor(argument: &str, value: Option<&Value>) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(s.clone().none_if_empty()),
        Some(other) => Err(Error::invalid_argument(
            argument,
            format!("must be a cursor string, got {}", json_type_name(other)),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Results
// ============================================================================

/// Information about the returned window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether records exist after the last returned edge
    pub has_next_page: bool,
    /// Whether records exist before the first returned edge
    pub has_previous_page: bool,
    /// Cursor of the first returned edge
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last returned edge
    pub end_cursor: Option<Cursor>,
}

/// A page of edges plus its page info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Returned edges, in collection order
    pub edges: Vec<Edge<T>>,
    /// Information about the page
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// An empty connection
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }

    /// Iterate over the nodes of the page
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    /// Iterate over the cursors of the page
    pub fn cursors(&self) -> impl Iterator<Item = &Cursor> {
        self.edges.iter().map(|e| &e.cursor)
    }

    /// Map every node, keeping cursors and page info
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Connection<U> {
        Connection {
            edges: self.edges.into_iter().map(|e| e.map(&mut f)).collect(),
            page_info: self.page_info,
        }
    }
}

impl<T: Clone> Connection<&T> {
    /// Clone the borrowed nodes into an owned connection
    pub fn cloned(self) -> Connection<T> {
        self.map(T::clone)
    }
}
