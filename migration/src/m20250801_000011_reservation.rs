use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20250801_000004_user::User, m20250801_000006_team::Team, m20250801_000008_room::Room,
};

static FK_RESERVATION_ROOM_ID: &str = "fk_reservation_room_id";
static FK_RESERVATION_TEAM_ID: &str = "fk_reservation_team_id";
static FK_RESERVATION_CREATED_BY_ID: &str = "fk_reservation_created_by_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::RoomId))
                    .col(integer(Reservation::TeamId))
                    .col(integer(Reservation::CreatedById))
                    .col(timestamp(Reservation::Start))
                    .col(timestamp(Reservation::End))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_ROOM_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::RoomId)
                    .to_tbl(Room::Table)
                    .to_col(Room::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_TEAM_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RESERVATION_CREATED_BY_ID)
                    .from_tbl(Reservation::Table)
                    .from_col(Reservation::CreatedById)
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
                    .name(FK_RESERVATION_CREATED_BY_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESERVATION_TEAM_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RESERVATION_ROOM_ID)
                    .table(Reservation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    RoomId,
    TeamId,
    CreatedById,
    Start,
    End,
}
