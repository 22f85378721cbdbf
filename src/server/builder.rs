//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for assembling a server from
//! configuration and an optional pre-built registry, and the run_server
//! function used by the binary.

use crate::config::Config;
use crate::core::registry::ActivityRegistry;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServerError};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    registry: Option<ActivityRegistry>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an already-seeded registry instead of loading the catalog
    pub fn with_registry(mut self, registry: ActivityRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServerError::config("Configuration is required"))?;

        match self.registry {
            Some(registry) => Ok(HttpServer::with_registry(&config, registry)),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Run the server until it is shut down
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting Mergington activities service v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    let server_config = server.config();

    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API Endpoints:");
    info!("   GET    /health - Health check");
    info!("   GET    /activities - Activity list");
    info!("   GET    /activities/{{name}} - Single activity");
    info!("   POST   /activities/{{name}}/signup?email= - Sign up");
    info!("   DELETE /activities/{{name}}/unregister?email= - Unregister");
    info!("   GET    /activities/{{name}}/members - Member roles");
    info!("   POST   /activities/{{name}}/roles/assign?email=&role= - Assign role");
    info!("   POST   /activities/{{name}}/roles/remove?email=&role= - Remove role");

    server.start().await
}
