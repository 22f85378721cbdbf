//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

pub mod logging;
pub mod registry;
pub mod server;

// Re-export all configuration types
pub use logging::*;
pub use registry::*;
pub use server::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}
