//! HTTP middleware implementations
//!
//! - Request ID tracking
//! - Header helpers for the acting user

mod helpers;
mod request_id;


pub use helpers::{ACTOR_HEADER, REQUEST_ID_HEADER, extract_actor_email, extract_request_id};
pub use request_id::{RequestIdMiddleware, RequestIdMiddlewareService};
