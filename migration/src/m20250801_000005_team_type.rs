use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamType::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamType::Id))
                    .col(string_uniq(TeamType::Name))
                    .col(integer(TeamType::Priority))
                    .col(integer(TeamType::AdvanceTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamType {
    Table,
    Id,
    Name,
    Priority,
    AdvanceTime,
}
