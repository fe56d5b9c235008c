//! Loader module
//!
//! Reads connection configuration (YAML) and record collections (JSON).
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_config` / `load_config_from_str` - parse and validate a
//!   [`ConnectionsConfig`](crate::config::ConnectionsConfig)
//! - `load_document` / `load_collection` / `resolve_collection` - obtain the ordered records a
//!   connection field paginates, either the document itself or one of its fields

mod collection;
mod parser;

pub use collection::{load_collection, load_document, resolve_collection};
pub use parser::{load_config, load_config_from_str};

#[cfg(test)]
mod tests;
