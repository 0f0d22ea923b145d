//! Configuration system using TOML files.
//!
//! The config path comes from the `--config` flag or the `CONFIG_PATH`
//! environment variable. Every section is optional; missing fields fall
//! back to defaults suitable for local development. Settings are loaded
//! once at startup and passed explicitly to the components that need
//! them - there is no ambient global configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment environment: "local", "dev" or "prod".
    /// Selects log format and verbosity.
    pub env: Env,

    /// HTTP server settings
    pub server: ServerConfig,

    /// Database settings
    pub database: DatabaseConfig,

    /// External enrichment service settings
    pub enrichment: EnrichmentConfig,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Local,
    Dev,
    Prod,
}

/// HTTP listen settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, host:port
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (default: song_catalog.db in cwd)
    pub path: Option<PathBuf>,
}

/// Enrichment service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Base URL of the external metadata service
    pub base_url: String,

    /// Timeout for outbound enrichment calls, in seconds
    pub timeout_secs: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://0.0.0.0:8081".to_string(),
            timeout_secs: 4,
        }
    }
}

/// Load configuration.
///
/// With no path, returns defaults. With a path, the file must exist and
/// parse - a misconfigured deployment should fail at startup rather than
/// run with silently wrong settings.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        tracing::info!("no config file given, using defaults");
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config =
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    tracing::info!("loaded config from {:?}", path);
    Ok(config)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),
}
