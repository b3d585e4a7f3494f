pub use sea_orm_migration::prelude::*;

mod m20250801_000001_role;
mod m20250801_000002_permission;
mod m20250801_000003_role_permission;
mod m20250801_000004_user;
mod m20250801_000005_team_type;
mod m20250801_000006_team;
mod m20250801_000007_team_user;
mod m20250801_000008_room;
mod m20250801_000009_room_feature;
mod m20250801_000010_room_feature_assignment;
mod m20250801_000011_reservation;
mod m20250801_000012_seed_access_control;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_role::Migration),
            Box::new(m20250801_000002_permission::Migration),
            Box::new(m20250801_000003_role_permission::Migration),
            Box::new(m20250801_000004_user::Migration),
            Box::new(m20250801_000005_team_type::Migration),
            Box::new(m20250801_000006_team::Migration),
            Box::new(m20250801_000007_team_user::Migration),
            Box::new(m20250801_000008_room::Migration),
            Box::new(m20250801_000009_room_feature::Migration),
            Box::new(m20250801_000010_room_feature_assignment::Migration),
            Box::new(m20250801_000011_reservation::Migration),
            Box::new(m20250801_000012_seed_access_control::Migration),
        ]
    }
}
