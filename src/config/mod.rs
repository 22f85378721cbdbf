//! Configuration management for the activities service
//!
//! Configuration comes from a YAML file, then environment overrides, then
//! command-line flags.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "ACTIVITIES_";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServerError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ServerError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `ACTIVITIES_*` overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `ACTIVITIES_*` overrides from an arbitrary lookup
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|v| !v.is_empty());

        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| ServerError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(catalog) = var("CATALOG") {
            self.registry.catalog_file = Some(PathBuf::from(catalog));
        }
        if let Some(enforce) = var("ENFORCE_CAPACITY") {
            self.registry.enforce_capacity = parse_bool(&enforce).ok_or_else(|| {
                ServerError::Config(format!("Invalid enforce_capacity flag: {}", enforce))
            })?;
        }
        if let Some(dir) = var("STATIC_DIR") {
            self.registry.static_dir = PathBuf::from(dir);
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = var("LOG_JSON") {
            self.logging.json = parse_bool(&json)
                .ok_or_else(|| ServerError::Config(format!("Invalid log_json flag: {}", json)))?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get registry configuration
    pub fn registry(&self) -> &RegistryConfig {
        &self.registry
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| ServerError::Config(format!("Server config error: {}", e)))?;

        self.server
            .cors
            .validate()
            .map_err(|e| ServerError::Config(format!("CORS config error: {}", e)))?;

        self.registry
            .validate()
            .map_err(|e| ServerError::Config(format!("Registry config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| ServerError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.registry = self.registry.merge(other.registry);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ServerError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ServerError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
