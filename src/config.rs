//! Configuration for the grants MCP server
//!
//! Configuration comes from an optional TOML file plus one environment
//! variable holding the upstream credential. The credential is resolved
//! once at startup into the client configuration and never re-read; its
//! absence is not an error here - upstream rejects the call and that
//! rejection is surfaced as tool output.

use crate::grants::{GrantsClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted for the upstream credential by default
pub const DEFAULT_API_KEY_ENV: &str = "SIMPLER_GRANTS_API_KEY";

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub api: ApiSection,
}

/// Server identity advertised during protocol initialization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSection {
    #[serde(default = "default_server_name")]
    pub name: String,
    #[serde(default = "default_server_description")]
    pub description: String,
}

/// Upstream API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSection {
    /// Base URL of the opportunities search API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_server_name() -> String {
    "grants-mcp".to_string()
}

fn default_server_description() -> String {
    "Government grant opportunity search".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            description: default_server_description(),
        }
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSection::default(),
            api: ApiSection::default(),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the first default path that exists, else built-in defaults.
    /// The server must be able to boot from environment alone.
    pub fn load_default() -> Result<Self, ConfigError> {
        let default_paths = ["grants-mcp.toml", "config/grants-mcp.toml"];

        for path_str in default_paths {
            let path = Path::new(path_str);
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        Ok(Self::default())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Resolve the upstream client configuration. Called once at startup;
    /// a missing credential resolves to an empty string rather than an
    /// error, so upstream gets to reject the call itself.
    pub fn client_config(&self) -> GrantsClientConfig {
        GrantsClientConfig {
            base_url: self.api.base_url.trim_end_matches('/').to_string(),
            api_key: std::env::var(&self.api.api_key_env).unwrap_or_default(),
        }
    }
}
