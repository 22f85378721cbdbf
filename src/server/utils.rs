//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::ServerError;

impl HttpServer {
    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> ServerError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => ServerError::server(format!(
                r#"
┌─────────────────────────────────────────────────────────────────┐
│  Port {} is already in use
├─────────────────────────────────────────────────────────────────┤
│  1. Find the process holding it:
│     lsof -i:{}
│
│  2. Use a different port:
│     --port {} or ACTIVITIES_PORT={}
└─────────────────────────────────────────────────────────────────┘
"#,
                port,
                port,
                port.saturating_add(1),
                port.saturating_add(1)
            )),
            std::io::ErrorKind::PermissionDenied => ServerError::server(format!(
                r#"
┌─────────────────────────────────────────────────────────────────┐
│  Permission denied for port {}
├─────────────────────────────────────────────────────────────────┤
│  Use a port >= 1024 (non-privileged):
│     --port 8000 or ACTIVITIES_PORT=8000
└─────────────────────────────────────────────────────────────────┘
"#,
                port
            )),
            _ => ServerError::server(format!("Failed to bind to {}: {}", bind_addr, error)),
        }
    }
}
