//! Helper functions for middleware and handlers

use actix_web::http::header::HeaderMap;

/// Header naming the acting user on role mutations
pub const ACTOR_HEADER: &str = "x-actor-email";

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extract the acting user's email.
///
/// A missing, empty, or non-UTF-8 header means no actor.
pub fn extract_actor_email(headers: &HeaderMap) -> Option<String> {
    headers
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
}

/// Extract a caller-supplied request id, if usable
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty() && id.len() <= 128)
        .map(str::to_string)
}
