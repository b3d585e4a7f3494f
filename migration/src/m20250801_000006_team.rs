use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000005_team_type::TeamType;

static FK_TEAM_TEAM_TYPE_ID: &str = "fk_team_team_type_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_uniq(Team::Name))
                    .col(integer(Team::TeamTypeId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_TEAM_TYPE_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::TeamTypeId)
                    .to_tbl(TeamType::Table)
                    .to_col(TeamType::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_TEAM_TYPE_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    TeamTypeId,
}
