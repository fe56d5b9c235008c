//! Configuration types for connection definitions
//!
//! A configuration file names the connections a deployment paginates and
//! the key specification of each:
//!
//! ```yaml
//! strict_cursors: false
//! connections:
//!   users:
//!     name: User
//!     key: [id]
//!   posts:
//!     key: [created_at, id]   # namespace defaults to "cursor"
//! ```

use crate::cursor::KeySpec;
use crate::error::{Error, Result};
use crate::pagination::Paginator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete connections configuration loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionsConfig {
    /// Kind of config (always "connections")
    #[serde(default = "default_kind")]
    pub kind: String,

    /// Reject undecodable or foreign `after`/`before` cursors
    #[serde(default)]
    pub strict_cursors: bool,

    /// Connection definitions by field name
    #[serde(default)]
    pub connections: BTreeMap<String, KeySpec>,
}

fn default_kind() -> String {
    "connections".to_string()
}

impl ConnectionsConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            kind: default_kind(),
            ..Default::default()
        }
    }

    /// Add a connection definition
    #[must_use]
    pub fn with_connection(mut self, field: impl Into<String>, key_spec: KeySpec) -> Self {
        self.connections.insert(field.into(), key_spec);
        self
    }

    /// Key specification of a connection
    pub fn key_spec(&self, connection: &str) -> Result<&KeySpec> {
        self.connections
            .get(connection)
            .ok_or_else(|| Error::connection_not_found(connection))
    }

    /// Paginator honouring `strict_cursors`
    pub fn paginator(&self) -> Paginator {
        Paginator::new().with_strict_cursors(self.strict_cursors)
    }

    /// Names of the configured connections, sorted
    pub fn connection_names(&self) -> Vec<&str> {
        self.connections.keys().map(String::as_str).collect()
    }

    /// Check every connection definition
    pub fn validate(&self) -> Result<()> {
        if self.kind != "connections" {
            return Err(Error::config(format!(
                "Unsupported config kind '{}', expected 'connections'",
                self.kind
            )));
        }

        for (field, key_spec) in &self.connections {
            if key_spec.name.is_empty() {
                return Err(Error::config(format!(
                    "Connection '{field}' has an empty cursor name"
                )));
            }
            if key_spec.fields.is_empty() {
                return Err(Error::config(format!(
                    "Connection '{field}' must list at least one key field"
                )));
            }
            if let Some(blank) = key_spec.fields.iter().find(|f| f.trim().is_empty()) {
                return Err(Error::config(format!(
                    "Connection '{field}' has a blank key field '{blank}'"
                )));
            }
        }

        Ok(())
    }
}
