//! Activity registry
//!
//! In-memory catalog of extracurricular activities and the students who
//! hold roles in them.
//!
//! # Roles
//!
//! - `participant`: an ordinary signed-up student
//! - `organizer`: administers the activity's roles
//! - anything else: an opaque tag
//!
//! While an activity has no organizer, roles may be changed freely, but the
//! organizer role can only be self-granted (bootstrap). Once an organizer
//! exists, only organizers may assign or remove roles.
//!
//! # Usage
//!
//! ```rust
//! use mergington_activities::core::registry::{ActivityRegistry, Role};
//!
//! let registry = ActivityRegistry::default();
//! registry.sign_up("Chess Club", "new@mergington.edu").unwrap();
//! registry
//!     .assign_role(
//!         "Chess Club",
//!         "michael@mergington.edu",
//!         Role::Organizer,
//!         Some("michael@mergington.edu"),
//!     )
//!     .unwrap();
//! ```

pub mod error;
pub mod policy;
pub mod registry;
pub mod seed;
pub mod types;

// Re-export commonly used types
pub use error::{Denial, RegistryError, RegistryResult, RoleChange};
pub use registry::{ActivityRegistry, ActivityRegistryHandle};
pub use seed::{ActivitySeed, Catalog, default_catalog, load_catalog};
pub use types::{Activity, Confirmation, Members, Role, RoleSet};
