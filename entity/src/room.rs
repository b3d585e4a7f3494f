use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_feature_assignment::Entity")]
    RoomFeatureAssignment,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::room_feature::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_feature_assignment::Relation::RoomFeature.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_feature_assignment::Relation::Room.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
