use sea_orm::entity::prelude::*;

/// A tag describing a room capability, e.g. "projector".
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_feature_assignment::Entity")]
    RoomFeatureAssignment,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_feature_assignment::Relation::Room.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_feature_assignment::Relation::RoomFeature.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
