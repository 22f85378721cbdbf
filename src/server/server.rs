//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::registry::{ActivityRegistry, load_catalog};
use crate::server::handlers::{health_check, root_redirect};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServerError};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use tracing::{debug, info};
use tracing_actix_web::TracingLogger;

/// Seconds in-flight requests get to finish after SIGINT/SIGTERM
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, seeding the registry from config
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let registry = build_registry(config).await?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server around an already-built registry
    pub fn with_registry(config: &Config, registry: ActivityRegistry) -> Self {
        let state = AppState::new(config.clone(), registry);

        Self {
            config: config.server.clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        debug!("Setting up routes and middleware");

        let cors = build_cors(&state.config.server.cors);
        let static_dir = state.config.registry.static_dir.clone();

        let query_config = web::QueryConfig::default()
            .error_handler(|err, _req| ServerError::bad_request(err.to_string()).into());

        let app = App::new()
            .app_data(state)
            .app_data(query_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "Mergington-Activities")))
            .route("/", web::get().to(root_redirect))
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes);

        if static_dir.is_dir() {
            app.service(Files::new("/static", static_dir).index_file("index.html"))
        } else {
            debug!("Static directory {:?} not found, front-end disabled", static_dir);
            app
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ServerError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Seed the registry from the configured catalog, or the built-in one
pub async fn build_registry(config: &Config) -> Result<ActivityRegistry> {
    let registry = match &config.registry.catalog_file {
        Some(path) => ActivityRegistry::new(load_catalog(path).await?)?,
        None => {
            debug!("No catalog file configured, using built-in catalog");
            ActivityRegistry::default()
        }
    };

    info!(
        activities = registry.len(),
        enforce_capacity = config.registry.enforce_capacity,
        "Activity registry ready"
    );

    Ok(registry.with_capacity_enforcement(config.registry.enforce_capacity))
}

fn build_cors(cors_config: &crate::config::CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if !cors_config.enabled {
        return cors;
    }

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
