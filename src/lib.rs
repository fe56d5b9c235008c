//! # relay-window
//!
//! Relay-style cursor pagination over ordered, in-memory collections.
//!
//! Given records already sorted in their canonical order, a key
//! specification and the `first`/`after`/`last`/`before` arguments, it
//! returns the window of edges plus `hasNextPage`/`hasPreviousPage`.
//!
//! ## Quick Start
//!
//! ```rust
//! use relay_window::{paginate, KeySpec, PaginationArgs};
//! use serde_json::json;
//!
//! let users = vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})];
//! let key_spec = KeySpec::new("User", ["id"]);
//!
//! let page = paginate(&users, &key_spec, &PaginationArgs::new().with_first(2));
//! assert_eq!(page.edges.len(), 2);
//! assert!(page.page_info.has_next_page);
//!
//! let after = page.page_info.end_cursor.clone().unwrap();
//! let next = paginate(&users, &key_spec, &PaginationArgs::new().with_after(after.into_string()));
//! assert_eq!(next.edges[0].node, &json!({"id": 3}));
//! assert!(!next.page_info.has_next_page);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! paginate(collection, key_spec, args)
//!     │
//!     ├── window::extract(collection, key_spec, after, before)
//!     │       └── CursorCodec::encode(key_spec, record)   per record
//!     │
//!     └── first/last truncation + boundary comparison → Connection
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and the record trait
pub mod types;

/// Cursor encoding
pub mod cursor;

/// Range extraction between cursors
pub mod window;

/// Relay pagination
pub mod pagination;

/// Connection definitions
pub mod config;

/// Config and collection loading
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::Record;

pub use config::ConnectionsConfig;
pub use cursor::{Cursor, CursorCodec, KeySpec};
pub use loader::{load_config, load_config_from_str};
pub use pagination::{paginate, Connection, PageInfo, PaginationArgs, Paginator};
pub use window::{Edge, Window};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
