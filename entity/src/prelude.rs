pub use super::permission::Entity as Permission;
pub use super::reservation::Entity as Reservation;
pub use super::role::Entity as Role;
pub use super::role_permission::Entity as RolePermission;
pub use super::room::Entity as Room;
pub use super::room_feature::Entity as RoomFeature;
pub use super::room_feature_assignment::Entity as RoomFeatureAssignment;
pub use super::team::Entity as Team;
pub use super::team_type::Entity as TeamType;
pub use super::team_user::Entity as TeamUser;
pub use super::user::Entity as User;
