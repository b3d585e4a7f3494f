//! HTTP handlers. Thin: extract, validate presence, delegate to services,
//! map outcomes onto status codes.

pub mod auth;
pub mod reservation;
pub mod room;
pub mod team;
pub mod user;

use chrono::{NaiveDateTime, Utc};

use crate::error::validation::ValidationError;

/// Parses an RFC 3339 timestamp into the naive UTC representation used by
/// the schedule.
pub(crate) fn parse_time(value: &str) -> Result<NaiveDateTime, ValidationError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc).naive_utc())
        .map_err(|_| ValidationError::UnparsableTime)
}
