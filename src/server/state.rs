//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::registry::ActivityRegistry;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every actix worker; all fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// The activity registry
    pub registry: Arc<ActivityRegistry>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, registry: ActivityRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
