use sea_orm_migration::prelude::*;

use crate::{
    m20250801_000001_role::Role, m20250801_000002_permission::Permission,
    m20250801_000003_role_permission::RolePermission, m20250801_000005_team_type::TeamType,
};

/// Capability strings in seed order; odd ids are the base form, even ids the
/// `.elevated` form that bypasses team-membership checks.
static CAPABILITIES: [&str; 14] = [
    "team.create",
    "team.create.elevated",
    "team.read",
    "team.read.elevated",
    "team.update",
    "team.update.elevated",
    "team.delete",
    "team.delete.elevated",
    "reservation.create",
    "reservation.create.elevated",
    "reservation.update",
    "reservation.update.elevated",
    "reservation.delete",
    "reservation.delete.elevated",
];

static ROLE_STUDENT_ID: i32 = 1;
static ROLE_ADMIN_ID: i32 = 2;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Role::Table)
                    .columns([Role::Id, Role::Name])
                    .values_panic([ROLE_STUDENT_ID.into(), "student".into()])
                    .values_panic([ROLE_ADMIN_ID.into(), "admin".into()])
                    .to_owned(),
            )
            .await?;

        for (index, name) in CAPABILITIES.iter().enumerate() {
            let permission_id = index as i32 + 1;

            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Permission::Table)
                        .columns([Permission::Id, Permission::Name])
                        .values_panic([permission_id.into(), (*name).into()])
                        .to_owned(),
                )
                .await?;

            // Students hold every base capability, admins hold everything
            // including the elevated variants.
            if !name.ends_with(".elevated") {
                manager
                    .exec_stmt(
                        Query::insert()
                            .into_table(RolePermission::Table)
                            .columns([RolePermission::RoleId, RolePermission::PermissionId])
                            .values_panic([ROLE_STUDENT_ID.into(), permission_id.into()])
                            .to_owned(),
                    )
                    .await?;
            }

            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(RolePermission::Table)
                        .columns([RolePermission::RoleId, RolePermission::PermissionId])
                        .values_panic([ROLE_ADMIN_ID.into(), permission_id.into()])
                        .to_owned(),
                )
                .await?;
        }

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(TeamType::Table)
                    .columns([
                        TeamType::Id,
                        TeamType::Name,
                        TeamType::Priority,
                        TeamType::AdvanceTime,
                    ])
                    .values_panic([1.into(), "single".into(), 0.into(), 7.into()])
                    .values_panic([2.into(), "other_team".into(), 1.into(), 30.into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(RolePermission::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Permission::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(Role::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(TeamType::Table).to_owned())
            .await?;

        Ok(())
    }
}
