use sea_orm::entity::prelude::*;

/// Category of team, e.g. `single` or `other_team`.
///
/// `priority` is the scheduling tier used by conflict resolution: a larger
/// value displaces a strictly smaller one. `advance_time` is the number of
/// days ahead a team of this type may reserve.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub priority: i32,
    pub advance_time: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
