use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000008_room::Room, m20250801_000009_room_feature::RoomFeature};

static FK_ROOM_FEATURE_ASSIGNMENT_ROOM_ID: &str = "fk_room_feature_assignment_room_id";
static FK_ROOM_FEATURE_ASSIGNMENT_FEATURE_ID: &str = "fk_room_feature_assignment_feature_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomFeatureAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomFeatureAssignment::Id))
                    .col(integer(RoomFeatureAssignment::RoomId))
                    .col(integer(RoomFeatureAssignment::FeatureId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROOM_FEATURE_ASSIGNMENT_ROOM_ID)
                    .from_tbl(RoomFeatureAssignment::Table)
                    .from_col(RoomFeatureAssignment::RoomId)
                    .to_tbl(Room::Table)
                    .to_col(Room::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ROOM_FEATURE_ASSIGNMENT_FEATURE_ID)
                    .from_tbl(RoomFeatureAssignment::Table)
                    .from_col(RoomFeatureAssignment::FeatureId)
                    .to_tbl(RoomFeature::Table)
                    .to_col(RoomFeature::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROOM_FEATURE_ASSIGNMENT_FEATURE_ID)
                    .table(RoomFeatureAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ROOM_FEATURE_ASSIGNMENT_ROOM_ID)
                    .table(RoomFeatureAssignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(RoomFeatureAssignment::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomFeatureAssignment {
    Table,
    Id,
    RoomId,
    FeatureId,
}
