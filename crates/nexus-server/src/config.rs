//! Configuration file parsing for the server.
//!
//! Loads the bind address and the `[pipeline]` table (provider credentials,
//! failover chains, timeouts) from TOML.

use nexus_pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Port used when neither the config file nor `PORT` sets one
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3000)
    #[serde(default = "default_port")]
    pub bind_port: u16,

    /// Generation pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        config.pipeline.validate().map_err(ConfigError::Invalid)?;

        Ok(config)
    }

    /// Create a default configuration for testing
    ///
    /// No provider has a credential, so every request is answered by the
    /// simulation.
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: DEFAULT_PORT,
            pipeline: PipelineConfig::default(),
        }
    }

    /// Apply `PORT` and the provider API key variables from the environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").and_then(|p| p.trim().parse().ok()) {
            self.bind_port = port;
        }
        self.pipeline.providers = self.pipeline.providers.with_overrides(&lookup);
        self
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
