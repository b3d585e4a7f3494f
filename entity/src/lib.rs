//! SeaORM entity definitions for the teamroom database schema.

pub mod permission;
pub mod prelude;
pub mod reservation;
pub mod role;
pub mod role_permission;
pub mod room;
pub mod room_feature;
pub mod room_feature_assignment;
pub mod team;
pub mod team_type;
pub mod team_user;
pub mod user;
