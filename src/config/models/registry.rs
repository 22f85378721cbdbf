//! Activity registry configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Activity registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// YAML catalog to seed from; the built-in catalog when unset
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
    /// Treat `max_participants` as a hard cap on signups
    #[serde(default)]
    pub enforce_capacity: bool,
    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            enforce_capacity: false,
            static_dir: default_static_dir(),
        }
    }
}

impl RegistryConfig {
    /// Merge registry configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.catalog_file.is_some() {
            self.catalog_file = other.catalog_file;
        }
        if other.enforce_capacity {
            self.enforce_capacity = other.enforce_capacity;
        }
        if other.static_dir != default_static_dir() {
            self.static_dir = other.static_dir;
        }
        self
    }

    /// Validate registry configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.catalog_file {
            if path.as_os_str().is_empty() {
                return Err("Catalog file path cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}
