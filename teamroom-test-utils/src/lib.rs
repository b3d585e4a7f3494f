//! Shared test infrastructure: an in-memory sqlite database with the
//! schema created from the entities, plus seed fixtures.
//!
//! Kept as a separate crate so both inline unit tests and integration tests
//! can use it without the main crate depending on itself.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::{
            day_time, hour, seed_feature, seed_reservation, seed_role, seed_room, seed_team,
            seed_team_type, seed_user,
        },
        TestError, TestSetup,
    };
}
