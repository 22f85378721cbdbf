//! HTTP route handlers outside the activity scope

use crate::server::state::AppState;
use actix_web::{HttpResponse, http::header, web};
use serde_json::json;

/// Front-end entry point the root path redirects to
pub const INDEX_PATH: &str = "/static/index.html";

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "git_hash": env!("GIT_HASH"),
        "activities": state.registry.len(),
    }))
}

/// Redirect `/` to the static front-end
pub async fn root_redirect() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, INDEX_PATH))
        .finish()
}
