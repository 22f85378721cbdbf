//! Activity registry
//!
//! The catalog is fixed once the registry is built; only member roles
//! change afterwards. Each activity sits behind its own lock, so every
//! operation runs as one atomic read-modify-write on a single activity and
//! readers always see a whole snapshot.

use super::error::{RegistryError, RegistryResult};
use super::policy;
use super::seed::{ActivitySeed, default_catalog, validate_seeds};
use super::types::{Activity, Confirmation, Members, Role};
use crate::utils::error::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// In-memory store of activities and their members
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: BTreeMap<String, RwLock<Activity>>,
    enforce_capacity: bool,
}

/// Thread-safe registry handle
pub type ActivityRegistryHandle = Arc<ActivityRegistry>;

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::build(default_catalog())
    }
}

impl ActivityRegistry {
    /// Build a registry from seed records
    pub fn new(seeds: Vec<ActivitySeed>) -> Result<Self> {
        validate_seeds(&seeds)?;
        Ok(Self::build(seeds))
    }

    fn build(seeds: Vec<ActivitySeed>) -> Self {
        let activities = seeds
            .into_iter()
            .map(ActivitySeed::into_activity)
            .map(|(name, activity)| (name, RwLock::new(activity)))
            .collect();

        Self {
            activities,
            enforce_capacity: false,
        }
    }

    /// Reject signups once `max_participants` participants are enrolled
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    /// Whether capacity is enforced on signup
    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    /// Number of activities
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Whether an activity with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    /// All activity names, sorted
    pub fn names(&self) -> Vec<String> {
        self.activities.keys().cloned().collect()
    }

    fn lookup(&self, name: &str) -> RegistryResult<&RwLock<Activity>> {
        self.activities
            .get(name)
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// Snapshot of every activity
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        debug!("Listing {} activities", self.activities.len());
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.read().clone()))
            .collect()
    }

    /// Snapshot of one activity
    pub fn get_activity(&self, name: &str) -> RegistryResult<Activity> {
        Ok(self.lookup(name)?.read().clone())
    }

    /// Snapshot of one activity's member map
    pub fn list_members(&self, name: &str) -> RegistryResult<Members> {
        Ok(self.lookup(name)?.read().members().clone())
    }

    /// Sign `email` up as a participant
    pub fn sign_up(&self, name: &str, email: &str) -> RegistryResult<Confirmation> {
        let mut activity = self.lookup(name)?.write();

        if activity.holds(email, &Role::Participant) {
            return Err(RegistryError::AlreadyMember {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if self.enforce_capacity
            && activity.participant_count() >= activity.max_participants as usize
        {
            warn!(activity = name, email, "Signup rejected, activity is full");
            return Err(RegistryError::Full {
                activity: name.to_string(),
                capacity: activity.max_participants,
            });
        }

        activity.grant(email, Role::Participant);
        info!(activity = name, email, "Signed up participant");

        Ok(Confirmation::new(format!("Signed up {} for {}", email, name)))
    }

    /// Drop the participant role of `email`; other roles are kept
    pub fn unregister(&self, name: &str, email: &str) -> RegistryResult<Confirmation> {
        let mut activity = self.lookup(name)?.write();

        if !activity.revoke(email, &Role::Participant) {
            return Err(RegistryError::NotMember {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        info!(activity = name, email, "Unregistered participant");

        Ok(Confirmation::new(format!(
            "Unregistered {} from {}",
            email, name
        )))
    }

    /// Grant `role` to `target` on behalf of `actor`. Re-granting a held role succeeds.
    pub fn assign_role(
        &self,
        name: &str,
        target: &str,
        role: Role,
        actor: Option<&str>,
    ) -> RegistryResult<Confirmation> {
        let mut activity = self.lookup(name)?.write();

        if let Err(e) = policy::authorize_assign(&activity, target, &role, actor) {
            warn!(activity = name, member = target, role = %role, actor, "Role assignment denied: {}", e);
            return Err(e);
        }

        let message = format!("Assigned role '{}' to {} in {}", role, target, name);
        if activity.grant(target, role) {
            info!(activity = name, member = target, actor, "{}", message);
        } else {
            debug!(activity = name, member = target, "Role already held");
        }

        Ok(Confirmation::new(message))
    }

    /// Revoke `role` from `target` on behalf of `actor`
    pub fn remove_role(
        &self,
        name: &str,
        target: &str,
        role: Role,
        actor: Option<&str>,
    ) -> RegistryResult<Confirmation> {
        let mut activity = self.lookup(name)?.write();

        if let Err(e) = policy::authorize_remove(&activity, actor) {
            warn!(activity = name, member = target, role = %role, actor, "Role removal denied: {}", e);
            return Err(e);
        }

        if !activity.revoke(target, &role) {
            return Err(RegistryError::NoSuchRole {
                email: target.to_string(),
                role: role.to_string(),
            });
        }

        let message = format!("Removed role '{}' from {} in {}", role, target, name);
        info!(activity = name, member = target, actor, "{}", message);

        Ok(Confirmation::new(message))
    }
}
