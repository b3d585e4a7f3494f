use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000001_role::Role;

static FK_USER_ROLE_ID: &str = "fk_user_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Name))
                    .col(string_uniq(User::Email))
                    .col(integer(User::RoleId))
                    .col(timestamp(User::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_ROLE_ID)
                    .from_tbl(User::Table)
                    .from_col(User::RoleId)
                    .to_tbl(Role::Table)
                    .to_col(Role::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_ROLE_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    RoleId,
    CreatedAt,
}
