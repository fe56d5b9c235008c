//! YAML parser for connection configuration

use crate::config::ConnectionsConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a connections configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<ConnectionsConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let config = load_config_from_str(&content)?;
    debug!(
        path = %path.display(),
        connections = config.connections.len(),
        "loaded connections config"
    );
    Ok(config)
}

/// Load a connections configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<ConnectionsConfig> {
    let config: ConnectionsConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
