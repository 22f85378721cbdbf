//! Activity, member and role types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A label held by a member within one activity.
///
/// Only the exact literals `"participant"` and `"organizer"` are special;
/// any other string is kept as an opaque tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Ordinary signed-up student
    Participant,
    /// Administrator for the activity
    Organizer,
    /// Any other tag, no authorization effect
    Other(String),
}

impl Role {
    /// Literal of the participant role
    pub const PARTICIPANT: &'static str = "participant";
    /// Literal of the organizer role
    pub const ORGANIZER: &'static str = "organizer";

    /// Parse a role label. Matching is exact and case-sensitive.
    pub fn parse(label: &str) -> Self {
        match label {
            Self::PARTICIPANT => Role::Participant,
            Self::ORGANIZER => Role::Organizer,
            other => Role::Other(other.to_string()),
        }
    }

    /// The label as stored and rendered
    pub fn as_str(&self) -> &str {
        match self {
            Role::Participant => Self::PARTICIPANT,
            Role::Organizer => Self::ORGANIZER,
            Role::Other(label) => label,
        }
    }
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::parse(s))
    }
}

impl From<&str> for Role {
    fn from(label: &str) -> Self {
        Role::parse(label)
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::PARTICIPANT => Role::Participant,
            Self::ORGANIZER => Role::Organizer,
            _ => Role::Other(label),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of roles one member holds in one activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Create an empty role set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the role is held
    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    /// Add a role; returns false if it was already held
    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    /// Remove a role; returns false if it was not held
    pub fn remove(&mut self, role: &Role) -> bool {
        self.0.remove(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Email to role set mapping of one activity
pub type Members = BTreeMap<String, RoleSet>;

/// A named extracurricular offering.
///
/// Members are only reachable through [`Activity::grant`] and
/// [`Activity::revoke`], which keep the map free of empty role sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Free text description
    pub description: String,
    /// Free text schedule
    pub schedule: String,
    /// Capacity of the participant roster
    pub max_participants: u32,
    members: Members,
}

impl Activity {
    /// Create an activity with no members
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            members: Members::new(),
        }
    }

    /// Current member map
    pub fn members(&self) -> &Members {
        &self.members
    }

    /// Roles held by `email`, if it has an entry
    pub fn roles_of(&self, email: &str) -> Option<&RoleSet> {
        self.members.get(email)
    }

    /// Whether `email` holds `role`
    pub fn holds(&self, email: &str, role: &Role) -> bool {
        self.members
            .get(email)
            .is_some_and(|roles| roles.contains(role))
    }

    /// Whether any member holds the organizer role
    pub fn has_organizer(&self) -> bool {
        self.members
            .values()
            .any(|roles| roles.contains(&Role::Organizer))
    }

    /// Whether `email` is an organizer
    pub fn is_organizer(&self, email: &str) -> bool {
        self.holds(email, &Role::Organizer)
    }

    /// Number of members holding the participant role
    pub fn participant_count(&self) -> usize {
        self.members
            .values()
            .filter(|roles| roles.contains(&Role::Participant))
            .count()
    }

    /// Grant `role` to `email`, creating the entry if absent.
    /// Returns false if the role was already held.
    pub fn grant(&mut self, email: &str, role: Role) -> bool {
        self.members
            .entry(email.to_string())
            .or_default()
            .insert(role)
    }

    /// Revoke `role` from `email`, dropping the entry once its last role is gone.
    /// Returns false if the role was not held.
    pub fn revoke(&mut self, email: &str, role: &Role) -> bool {
        let Some(roles) = self.members.get_mut(email) else {
            return false;
        };
        let removed = roles.remove(role);
        if roles.is_empty() {
            self.members.remove(email);
        }
        removed
    }
}

/// Success payload of a mutating operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Human-readable confirmation
    pub message: String,
}

impl Confirmation {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }
}
