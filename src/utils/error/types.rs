//! Error type definitions

use crate::core::registry::RegistryError;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ServerError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server lifecycle errors (bind, run)
    #[error("Server error: {0}")]
    Server(String),

    /// Malformed request, e.g. a missing query parameter
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Rejections from the activity registry
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
