//! Registry error types
//!
//! Every failure is a synchronous rejection; a rejected operation leaves the
//! activity untouched.

use std::fmt;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Role mutation being authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    /// Granting a role
    Assign,
    /// Revoking a role
    Remove,
}

impl fmt::Display for RoleChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleChange::Assign => f.write_str("assign"),
            RoleChange::Remove => f.write_str("remove"),
        }
    }
}

/// Why the authorization policy rejected a role mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The activity has organizers and the actor is not one of them
    NotOrganizer(RoleChange),
    /// Organizer-less activity, and the organizer grant does not target the actor
    BootstrapNotSelf,
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::NotOrganizer(change) => write!(f, "Only organizers can {} roles", change),
            Denial::BootstrapNotSelf => f.write_str("Bootstrap organizer must assign themself"),
        }
    }
}

/// Registry error types
///
/// The display strings double as the `detail` text of HTTP error bodies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The referenced activity does not exist
    #[error("Activity not found")]
    NotFound { activity: String },

    /// Signup for an email that already holds the participant role
    #[error("Student is already signed up")]
    AlreadyMember { activity: String, email: String },

    /// Unregister for an email that does not hold the participant role
    #[error("Student is not signed up for this activity")]
    NotMember { activity: String, email: String },

    /// Rejected by the role authorization policy
    #[error("{0}")]
    Forbidden(Denial),

    /// Removal of a role the target does not hold
    #[error("Member does not have this role")]
    NoSuchRole { email: String, role: String },

    /// Signup rejected because the participant roster is at capacity
    #[error("Activity is full")]
    Full { activity: String, capacity: u32 },
}

impl RegistryError {
    pub(crate) fn not_found(activity: &str) -> Self {
        RegistryError::NotFound {
            activity: activity.to_string(),
        }
    }

    /// HTTP status code the error kind maps to
    pub fn status_code(&self) -> u16 {
        match self {
            RegistryError::NotFound { .. } => 404,
            RegistryError::Forbidden(_) => 403,
            RegistryError::AlreadyMember { .. }
            | RegistryError::NotMember { .. }
            | RegistryError::NoSuchRole { .. }
            | RegistryError::Full { .. } => 400,
        }
    }

    /// Stable machine-readable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::NotFound { .. } => "NOT_FOUND",
            RegistryError::AlreadyMember { .. } => "ALREADY_MEMBER",
            RegistryError::NotMember { .. } => "NOT_MEMBER",
            RegistryError::Forbidden(_) => "FORBIDDEN",
            RegistryError::NoSuchRole { .. } => "NO_SUCH_ROLE",
            RegistryError::Full { .. } => "ACTIVITY_FULL",
        }
    }
}
