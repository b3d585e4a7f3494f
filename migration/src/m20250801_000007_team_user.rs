use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000004_user::User, m20250801_000006_team::Team};

static FK_TEAM_USER_TEAM_ID: &str = "fk_team_user_team_id";
static FK_TEAM_USER_USER_ID: &str = "fk_team_user_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamUser::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamUser::Id))
                    .col(integer(TeamUser::TeamId))
                    .col(integer(TeamUser::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_USER_TEAM_ID)
                    .from_tbl(TeamUser::Table)
                    .from_col(TeamUser::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_USER_USER_ID)
                    .from_tbl(TeamUser::Table)
                    .from_col(TeamUser::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_USER_USER_ID)
                    .table(TeamUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_USER_TEAM_ID)
                    .table(TeamUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamUser {
    Table,
    Id,
    TeamId,
    UserId,
}
