//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relay cursor pagination over JSON collections
#[derive(Parser, Debug)]
#[command(name = "relay-window")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connections configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paginate a collection and print the connection
    Page {
        /// Connection name from the configuration
        #[arg(long)]
        connection: String,

        /// JSON data file (an array, or an object holding one)
        #[arg(short, long)]
        data: PathBuf,

        /// Field of the data document holding the records
        #[arg(long)]
        field: Option<String>,

        /// Keep at most this many edges from the start
        #[arg(long)]
        first: Option<usize>,

        /// Only records after this cursor
        #[arg(long)]
        after: Option<String>,

        /// Keep at most this many edges from the end
        #[arg(long)]
        last: Option<usize>,

        /// Only records before this cursor
        #[arg(long)]
        before: Option<String>,

        /// Pagination arguments as a JSON object (overrides the flags above)
        #[arg(long)]
        params: Option<String>,
    },

    /// Print the cursor of a record
    Cursor {
        /// Connection name from the configuration
        #[arg(long)]
        connection: String,

        /// Record as inline JSON
        #[arg(long)]
        record: String,
    },

    /// Print the composite key behind a cursor
    Decode {
        /// Cursor to decode
        cursor: String,
    },

    /// Validate the connections configuration
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
