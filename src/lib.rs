//! # Mergington Activities
//!
//! An in-memory registry of extracurricular activities for Mergington High
//! School, served over HTTP. Students sign up for and leave activities, and
//! each activity carries a per-member set of roles administered by its
//! organizers.
//!
//! ## Features
//!
//! - **Seeded catalog**: the activity set is fixed at startup, from the
//!   built-in catalog or a YAML file
//! - **Role state machine**: participants, organizers and custom labels
//! - **Bootstrap organizer**: the first organizer of an activity must
//!   assign the role to themself
//! - **Atomic updates**: every mutation is a single critical section on one
//!   activity
//!
//! ## Library usage
//!
//! ```rust
//! use mergington_activities::{ActivityRegistry, Role};
//!
//! let registry = ActivityRegistry::default();
//! registry.sign_up("Chess Club", "ana@mergington.edu")?;
//! registry.assign_role(
//!     "Chess Club",
//!     "ana@mergington.edu",
//!     Role::Organizer,
//!     Some("ana@mergington.edu"),
//! )?;
//!
//! let members = registry.list_members("Chess Club")?;
//! assert!(members["ana@mergington.edu"].contains(&Role::Organizer));
//! # Ok::<(), mergington_activities::RegistryError>(())
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use mergington_activities::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/activities.yaml").await?;
//!     server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::registry::{
    Activity, ActivityRegistry, ActivityRegistryHandle, ActivitySeed, Confirmation, Members,
    RegistryError, Role, RoleSet,
};
pub use utils::error::{Result, ServerError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Service build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
