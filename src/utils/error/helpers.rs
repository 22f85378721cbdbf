//! Helper functions for creating specific error types

use super::types::ServerError;

impl ServerError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    /// Text rendered as the `detail` of an HTTP error body
    pub fn detail(&self) -> String {
        match self {
            ServerError::Registry(e) => e.to_string(),
            ServerError::BadRequest(message) => message.clone(),
            _ => "An internal error occurred".to_string(),
        }
    }
}
