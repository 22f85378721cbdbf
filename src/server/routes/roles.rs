//! Role administration endpoints
//!
//! The acting user is taken from the `X-Actor-Email` header.

use super::RoleQuery;
use crate::core::registry::Role;
use crate::server::middleware::extract_actor_email;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};

/// Assign a role
/// POST /activities/{name}/roles/assign?email=&role=
pub async fn assign_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse> {
    let actor = extract_actor_email(req.headers());
    let confirmation = state.registry.assign_role(
        &path,
        &query.email,
        Role::parse(&query.role),
        actor.as_deref(),
    )?;
    Ok(HttpResponse::Ok().json(confirmation))
}

/// Remove a role
/// POST /activities/{name}/roles/remove?email=&role=
pub async fn remove_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse> {
    let actor = extract_actor_email(req.headers());
    let confirmation = state.registry.remove_role(
        &path,
        &query.email,
        Role::parse(&query.role),
        actor.as_deref(),
    )?;
    Ok(HttpResponse::Ok().json(confirmation))
}
