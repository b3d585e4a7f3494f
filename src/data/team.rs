use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QuerySelect, RelationTrait,
};

use crate::model::db::{TeamModel, TeamTypeModel, UserModel};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, team_type_id: i32) -> Result<TeamModel, DbErr> {
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            team_type_id: ActiveValue::Set(team_type_id),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn find_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Finds a team together with its type (priority tier, membership rules)
    pub async fn find_with_type(
        &self,
        team_id: i32,
    ) -> Result<Option<(TeamModel, TeamTypeModel)>, DbErr> {
        let result = entity::prelude::Team::find_by_id(team_id)
            .find_also_related(entity::prelude::TeamType)
            .one(self.db)
            .await?;

        // The FK guarantees the type exists; treat a missing row as absent.
        Ok(result.and_then(|(team, team_type)| team_type.map(|t| (team, t))))
    }

    pub async fn find_type_by_name(&self, name: &str) -> Result<Option<TeamTypeModel>, DbErr> {
        entity::prelude::TeamType::find()
            .filter(entity::team_type::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn rename(&self, team: TeamModel, name: &str) -> Result<TeamModel, DbErr> {
        let mut team: entity::team::ActiveModel = team.into();
        team.name = ActiveValue::Set(name.to_string());

        team.update(self.db).await
    }

    /// Deletes the team row only; the service layer cascades reservations
    /// and memberships first, inside a transaction.
    pub async fn delete(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Team::delete_by_id(team_id)
            .exec(self.db)
            .await
    }

    pub async fn add_member(&self, team_id: i32, user_id: i32) -> Result<(), DbErr> {
        let membership = entity::team_user::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        membership.insert(self.db).await?;

        Ok(())
    }

    pub async fn remove_member(&self, team_id: i32, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamUser::delete_many()
            .filter(entity::team_user::Column::TeamId.eq(team_id))
            .filter(entity::team_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    pub async fn remove_all_members(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamUser::delete_many()
            .filter(entity::team_user::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await
    }

    pub async fn has_member(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::TeamUser::find()
            .filter(entity::team_user::Column::TeamId.eq(team_id))
            .filter(entity::team_user::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    pub async fn member_count(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamUser::find()
            .filter(entity::team_user::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    pub async fn members(&self, team_id: i32) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .join(JoinType::InnerJoin, entity::user::Relation::TeamUser.def())
            .filter(entity::team_user::Column::TeamId.eq(team_id))
            .all(self.db)
            .await
    }

    pub async fn teams_of_user(&self, user_id: i32) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::Team::find()
            .join(JoinType::InnerJoin, entity::team::Relation::TeamUser.def())
            .filter(entity::team_user::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use teamroom_test_utils::prelude::*;

    use crate::data::team::TeamRepository;

    /// Expect membership queries to reflect seeded members
    #[tokio::test]
    async fn membership_queries() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &[]).await?;
        let team_type = seed_team_type(&test.db, "other_team", 1, 30).await?;
        let alice = seed_user(&test.db, "alice", role.id).await?;
        let bob = seed_user(&test.db, "bob", role.id).await?;
        let team = seed_team(&test.db, "blue", team_type.id, &[alice.id]).await?;

        let team_repository = TeamRepository::new(&test.db);

        assert!(team_repository.has_member(team.id, alice.id).await?);
        assert!(!team_repository.has_member(team.id, bob.id).await?);
        assert_eq!(team_repository.member_count(team.id).await?, 1);

        team_repository.add_member(team.id, bob.id).await?;

        assert_eq!(team_repository.member_count(team.id).await?, 2);
        let members = team_repository.members(team.id).await?;
        assert_eq!(members.len(), 2);

        Ok(())
    }

    /// Expect find_with_type to return the team's priority tier
    #[tokio::test]
    async fn find_with_type_returns_tier() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let team_type = seed_team_type(&test.db, "other_team", 1, 30).await?;
        let team = seed_team(&test.db, "blue", team_type.id, &[]).await?;

        let team_repository = TeamRepository::new(&test.db);
        let found = team_repository.find_with_type(team.id).await?;

        assert!(found.is_some());
        let (_, found_type) = found.unwrap();
        assert_eq!(found_type.priority, 1);

        Ok(())
    }

    /// Expect teams_of_user to list only the user's teams
    #[tokio::test]
    async fn teams_of_user_lists_memberships() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &[]).await?;
        let team_type = seed_team_type(&test.db, "other_team", 1, 30).await?;
        let alice = seed_user(&test.db, "alice", role.id).await?;
        let _blue = seed_team(&test.db, "blue", team_type.id, &[alice.id]).await?;
        let _red = seed_team(&test.db, "red", team_type.id, &[]).await?;

        let team_repository = TeamRepository::new(&test.db);
        let teams = team_repository.teams_of_user(alice.id).await?;

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "blue");

        Ok(())
    }
}
