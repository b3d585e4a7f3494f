//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so signatures don't import from the `entity` crate directly.

pub type UserModel = entity::user::Model;
pub type RoleModel = entity::role::Model;
pub type TeamModel = entity::team::Model;
pub type TeamTypeModel = entity::team_type::Model;
pub type RoomModel = entity::room::Model;
pub type RoomFeatureModel = entity::room_feature::Model;
pub type ReservationModel = entity::reservation::Model;
