//! Conflict classification for candidate reservations.
//!
//! Classification is a pure function of the candidate's priority tier and
//! the set of intersecting reservations; committing an override is the
//! reservation service's job, under the room lock.

use crate::data::reservation::ConflictingReservation;

/// The verdict for a candidate booking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictStatus {
    /// The window is free.
    NoConflict,
    /// Every clashing reservation sits on a strictly lower tier; the caller
    /// may displace them by repeating the request with an explicit override.
    Overridable,
    /// At least one clashing reservation is on an equal or higher tier.
    Failure,
}

/// Classifies a candidate against its conflict set.
///
/// Ties lose: a conflict on the candidate's own tier makes the whole set
/// non-overridable, regardless of what else is in it.
pub fn classify(candidate_priority: i32, conflicts: &[ConflictingReservation]) -> ConflictStatus {
    if conflicts.is_empty() {
        return ConflictStatus::NoConflict;
    }

    if conflicts
        .iter()
        .all(|conflict| conflict.priority < candidate_priority)
    {
        ConflictStatus::Overridable
    } else {
        ConflictStatus::Failure
    }
}
