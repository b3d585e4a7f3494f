use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000001_role::Role, m20250801_000002_permission::Permission,
};

static FK_ROLE_PERMISSION_ROLE_ID: &str = "fk_role_permission_role_id";
static FK_ROLE_PERMISSION_PERMISSION_ID: &str = "fk_role_permission_permission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RolePermission::Table)
                    .if_not_exists()
                    .col(pk_auto(RolePermission::Id))
                    .col(integer(RolePermission::RoleId))
                    .col(integer(RolePermission::PermissionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_PERMISSION_ROLE_ID)
                    .from_tbl(RolePermission::Table)
                    .from_col(RolePermission::RoleId)
                    .to_tbl(Role::Table)
                    .to_col(Role::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROLE_PERMISSION_PERMISSION_ID)
                    .from_tbl(RolePermission::Table)
                    .from_col(RolePermission::PermissionId)
                    .to_tbl(Permission::Table)
                    .to_col(Permission::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROLE_PERMISSION_PERMISSION_ID)
                    .table(RolePermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROLE_PERMISSION_ROLE_ID)
                    .table(RolePermission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RolePermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RolePermission {
    Table,
    Id,
    RoleId,
    PermissionId,
}
