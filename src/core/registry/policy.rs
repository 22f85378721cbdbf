//! Role authorization policy
//!
//! Once an activity has an organizer, only organizers may assign or remove
//! roles. Before that, anyone may change roles, except that the organizer
//! role can only be self-granted.

use super::error::{Denial, RegistryError, RegistryResult, RoleChange};
use super::types::{Activity, Role};

/// Authorize a role grant of `role` to `target` by `actor`
pub fn authorize_assign(
    activity: &Activity,
    target: &str,
    role: &Role,
    actor: Option<&str>,
) -> RegistryResult<()> {
    if activity.has_organizer() {
        return require_organizer(activity, actor, RoleChange::Assign);
    }

    if *role == Role::Organizer && actor != Some(target) {
        return Err(RegistryError::Forbidden(Denial::BootstrapNotSelf));
    }

    Ok(())
}

/// Authorize a role removal by `actor`
pub fn authorize_remove(activity: &Activity, actor: Option<&str>) -> RegistryResult<()> {
    if activity.has_organizer() {
        return require_organizer(activity, actor, RoleChange::Remove);
    }
    Ok(())
}

fn require_organizer(
    activity: &Activity,
    actor: Option<&str>,
    change: RoleChange,
) -> RegistryResult<()> {
    match actor {
        Some(actor) if activity.is_organizer(actor) => Ok(()),
        _ => Err(RegistryError::Forbidden(Denial::NotOrganizer(change))),
    }
}
