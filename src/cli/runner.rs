//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectionsConfig;
use crate::cursor::CursorCodec;
use crate::error::{Error, Result, ResultExt};
use crate::loader::{load_config, load_document, resolve_collection};
use crate::pagination::PaginationArgs;
use crate::types::JsonValue;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Page {
                connection,
                data,
                field,
                first,
                after,
                last,
                before,
                params,
            } => {
                let args = match params {
                    Some(params) => {
                        let params: JsonValue =
                            serde_json::from_str(params).context("Invalid --params JSON")?;
                        PaginationArgs::from_params(&params)?
                    }
                    None => PaginationArgs {
                        first: *first,
                        after: after.clone(),
                        last: *last,
                        before: before.clone(),
                    },
                };
                self.page(connection, data, field.as_deref(), &args)
            }
            Commands::Cursor { connection, record } => self.cursor(connection, record),
            Commands::Decode { cursor } => CursorCodec::decode(cursor),
            Commands::Validate => self.validate(),
        }
    }

    /// Load the connections configuration
    fn load_config(&self) -> Result<ConnectionsConfig> {
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use -c flag)"))?;
        load_config(path)
    }

    fn page(
        &self,
        connection: &str,
        data: &Path,
        field: Option<&str>,
        args: &PaginationArgs,
    ) -> Result<String> {
        let config = self.load_config()?;
        let key_spec = config.key_spec(connection)?;
        // An object document holds the records under the connection's name
        // unless a field is given explicitly.
        let document = load_document(data)?;
        let field = field.or_else(|| document.is_object().then_some(connection));
        let records = resolve_collection(document, field)?;

        info!(connection, records = records.len(), "paginating collection");

        let page = config.paginator().paginate(&records, key_spec, args)?;
        self.render(&page)
    }

    fn cursor(&self, connection: &str, record: &str) -> Result<String> {
        let config = self.load_config()?;
        let key_spec = config.key_spec(connection)?;
        let record: JsonValue = serde_json::from_str(record).context("Invalid --record JSON")?;
        Ok(key_spec.cursor(&record).into_string())
    }

    fn validate(&self) -> Result<String> {
        let config = self.load_config()?;
        let mut lines = vec![format!("OK: {} connection(s)", config.connections.len())];
        for (field, key_spec) in &config.connections {
            lines.push(format!(
                "  {field}: {} [{}]",
                key_spec.name,
                key_spec.fields.join(", ")
            ));
        }
        Ok(lines.join("\n"))
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let output = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(output)
    }
}
