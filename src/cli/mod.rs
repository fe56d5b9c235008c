//! CLI module
//!
//! Command-line interface for paginating JSON collections.
//!
//! # Commands
//!
//! - `page` - Paginate a collection and print the connection
//! - `cursor` - Print the cursor of a single record
//! - `decode` - Print the composite key behind a cursor
//! - `validate` - Check the connections configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
