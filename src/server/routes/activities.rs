//! Activity catalog and membership endpoints

use super::EmailQuery;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// List every activity
/// GET /activities
pub async fn list_activities(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.registry.list_activities()))
}

/// Get one activity
/// GET /activities/{name}
pub async fn get_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let name = path.into_inner();
    debug!(activity = %name, "Activity requested");

    let activity = state.registry.get_activity(&name)?;
    Ok(HttpResponse::Ok().json(activity))
}

/// Sign a student up
/// POST /activities/{name}/signup?email=
pub async fn sign_up(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse> {
    let confirmation = state.registry.sign_up(&path, &query.email)?;
    Ok(HttpResponse::Ok().json(confirmation))
}

/// Unregister a student
/// DELETE /activities/{name}/unregister?email=
pub async fn unregister(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse> {
    let confirmation = state.registry.unregister(&path, &query.email)?;
    Ok(HttpResponse::Ok().json(confirmation))
}

/// Member roster with roles
/// GET /activities/{name}/members
pub async fn list_members(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let members = state.registry.list_members(&path)?;
    Ok(HttpResponse::Ok().json(members))
}
