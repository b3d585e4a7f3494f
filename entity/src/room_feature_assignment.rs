use sea_orm::entity::prelude::*;

/// Junction table between rooms and their features.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_feature_assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub feature_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::room_feature::Entity",
        from = "Column::FeatureId",
        to = "super::room_feature::Column::Id"
    )]
    RoomFeature,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::room_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomFeature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
