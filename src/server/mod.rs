//! HTTP server implementation
//!
//! Routes requests to the activity registry and renders its results.

pub mod middleware;
pub mod routes;

pub mod builder;
mod handlers;
pub mod server;
pub mod state;
mod utils;

pub use server::HttpServer;
pub use state::AppState;
