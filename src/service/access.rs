//! Capability-based authorization.
//!
//! Each role carries a set of capability strings. A capability may be
//! suffixed `.elevated`, which grants the action on *any* resource; the base
//! form only covers resources the user is a member of. Authorization is a
//! disjunction: elevated alone suffices, base requires membership.

use std::fmt;

use crate::error::access::AccessError;

const ELEVATED_SUFFIX: &str = ".elevated";

/// An action the permission model guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    TeamCreate,
    TeamRead,
    TeamUpdate,
    TeamDelete,
    ReservationCreate,
    ReservationUpdate,
    ReservationDelete,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::TeamCreate => "team.create",
            Capability::TeamRead => "team.read",
            Capability::TeamUpdate => "team.update",
            Capability::TeamDelete => "team.delete",
            Capability::ReservationCreate => "reservation.create",
            Capability::ReservationUpdate => "reservation.update",
            Capability::ReservationDelete => "reservation.delete",
        }
    }

    fn from_str(name: &str) -> Option<Capability> {
        match name {
            "team.create" => Some(Capability::TeamCreate),
            "team.read" => Some(Capability::TeamRead),
            "team.update" => Some(Capability::TeamUpdate),
            "team.delete" => Some(Capability::TeamDelete),
            "reservation.create" => Some(Capability::ReservationCreate),
            "reservation.update" => Some(Capability::ReservationUpdate),
            "reservation.delete" => Some(Capability::ReservationDelete),
            _ => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single parsed capability string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grant {
    capability: Capability,
    bypasses_ownership: bool,
}

impl Grant {
    /// Parses a stored capability string, e.g. `team.read.elevated`.
    /// Unrecognized names are ignored rather than treated as errors, so
    /// stale rows cannot lock users out.
    fn parse(name: &str) -> Option<Grant> {
        match name.strip_suffix(ELEVATED_SUFFIX) {
            Some(base) => Capability::from_str(base).map(|capability| Grant {
                capability,
                bypasses_ownership: true,
            }),
            None => Capability::from_str(name).map(|capability| Grant {
                capability,
                bypasses_ownership: false,
            }),
        }
    }
}

/// The resolved set of grants attached to a user's role.
#[derive(Debug, Clone, Default)]
pub struct PermissionSet {
    grants: Vec<Grant>,
}

impl PermissionSet {
    pub fn from_names<I, S>(names: I) -> PermissionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PermissionSet {
            grants: names
                .into_iter()
                .filter_map(|name| Grant::parse(name.as_ref()))
                .collect(),
        }
    }

    /// Whether the action is permitted given the user's relationship to the
    /// resource. Elevated grants pass unconditionally; base grants pass only
    /// when `is_member` holds.
    pub fn allows(&self, capability: Capability, is_member: bool) -> bool {
        self.grants.iter().any(|grant| {
            grant.capability == capability && (grant.bypasses_ownership || is_member)
        })
    }

    /// Whether the user holds the elevated form of the capability.
    pub fn allows_elevated(&self, capability: Capability) -> bool {
        self.grants
            .iter()
            .any(|grant| grant.capability == capability && grant.bypasses_ownership)
    }
}

/// Checks the disjunction and produces the uniform 403 on failure.
pub fn require(
    permissions: &PermissionSet,
    capability: Capability,
    is_member: bool,
) -> Result<(), AccessError> {
    if permissions.allows(capability, is_member) {
        Ok(())
    } else {
        Err(AccessError::CapabilityRequired(capability))
    }
}

#[cfg(test)]
mod tests {
    use super::{require, Capability, PermissionSet};

    #[test]
    fn elevated_grant_bypasses_membership() {
        let permissions = PermissionSet::from_names(["team.read.elevated"]);

        assert!(permissions.allows(Capability::TeamRead, false));
        assert!(permissions.allows(Capability::TeamRead, true));
        assert!(permissions.allows_elevated(Capability::TeamRead));
    }

    #[test]
    fn base_grant_requires_membership() {
        let permissions = PermissionSet::from_names(["team.read"]);

        assert!(permissions.allows(Capability::TeamRead, true));
        assert!(!permissions.allows(Capability::TeamRead, false));
        assert!(!permissions.allows_elevated(Capability::TeamRead));
    }

    #[test]
    fn missing_grant_denies_even_members() {
        let permissions = PermissionSet::from_names(["team.read"]);

        assert!(!permissions.allows(Capability::TeamDelete, true));
        assert!(require(&permissions, Capability::TeamDelete, true).is_err());
    }

    #[test]
    fn unknown_names_are_ignored() {
        let permissions = PermissionSet::from_names(["no.such.capability", "team.update"]);

        assert!(permissions.allows(Capability::TeamUpdate, true));
        assert!(!permissions.allows(Capability::TeamCreate, true));
    }
}
