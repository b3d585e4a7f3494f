use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub team_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_type::Entity",
        from = "Column::TeamTypeId",
        to = "super::team_type::Column::Id"
    )]
    TeamType,
    #[sea_orm(has_many = "super::team_user::Entity")]
    TeamUser,
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::team_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamType.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_user::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::team_user::Relation::Team.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
