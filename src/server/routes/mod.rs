//! HTTP route modules
//!
//! All activity endpoints live under one `/activities` scope.

pub mod activities;
pub mod roles;

use actix_web::web;
use serde::Deserialize;

/// Configure activity and role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/activities")
            .route("", web::get().to(activities::list_activities))
            .route("/{name}", web::get().to(activities::get_activity))
            .route("/{name}/signup", web::post().to(activities::sign_up))
            .route("/{name}/unregister", web::delete().to(activities::unregister))
            .route("/{name}/members", web::get().to(activities::list_members))
            .route("/{name}/roles/assign", web::post().to(roles::assign_role))
            .route("/{name}/roles/remove", web::post().to(roles::remove_role)),
    );
}

/// `?email=` query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    /// Student email
    pub email: String,
}

/// `?email=&role=` query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RoleQuery {
    /// Target member email
    pub email: String,
    /// Role label
    pub role: String,
}
