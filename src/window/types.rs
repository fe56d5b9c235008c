//! Window types

use crate::cursor::Cursor;
use serde::{Deserialize, Serialize};

/// A record paired with its cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The record
    pub node: T,
    /// Cursor of the record
    pub cursor: Cursor,
}

impl<T> Edge<T> {
    /// Create an edge
    pub fn new(node: T, cursor: Cursor) -> Self {
        Self { node, cursor }
    }

    /// Map the node, keeping the cursor
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Edge<U> {
        Edge {
            node: f(self.node),
            cursor: self.cursor,
        }
    }
}

/// Edges surviving `after`/`before` filtering, plus the boundary markers
/// of the unfiltered collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<T> {
    /// In-range edges, in collection order
    pub edges: Vec<Edge<T>>,
    /// Cursor of the first record of the whole collection (empty if none)
    pub first_boundary_cursor: Cursor,
    /// Cursor of the last record of the whole collection (empty if none)
    pub last_boundary_cursor: Cursor,
}

