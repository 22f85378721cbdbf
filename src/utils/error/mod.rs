//! Error handling for the activities service
//!
//! Registry rejections pass through unchanged; everything else is a startup
//! or request-shape failure.

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{Result, ServerError};
