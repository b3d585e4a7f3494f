use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QuerySelect, RelationTrait,
};

use crate::model::db::{RoleModel, UserModel};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with the given role
    pub async fn create(&self, name: &str, email: &str, role_id: i32) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            role_id: ActiveValue::Set(role_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Finds users whose name starts with the given prefix
    pub async fn search_by_prefix(&self, prefix: &str) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Name.like(format!("{}%", prefix)))
            .all(self.db)
            .await
    }

    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<RoleModel>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Returns the capability strings attached to the user's role
    pub async fn permission_names(&self, user: &UserModel) -> Result<Vec<String>, DbErr> {
        let permissions = entity::prelude::Permission::find()
            .join(
                JoinType::InnerJoin,
                entity::permission::Relation::RolePermission.def(),
            )
            .filter(entity::role_permission::Column::RoleId.eq(user.role_id))
            .all(self.db)
            .await?;

        Ok(permissions
            .into_iter()
            .map(|permission| permission.name)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;
    use teamroom_test_utils::prelude::*;

    use crate::data::user::UserRepository;

    /// Expect the created user to be retrievable by name with its role intact
    #[tokio::test]
    async fn create_and_find_by_name() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &["team.read"]).await?;

        let user_repository = UserRepository::new(&test.db);
        let created = user_repository
            .create("alice", "alice@example.com", role.id)
            .await?;

        let found = user_repository.find_by_name("alice").await?;

        assert_eq!(found.as_ref().map(|u| u.id), Some(created.id));
        assert_eq!(found.map(|u| u.role_id), Some(role.id));

        Ok(())
    }

    /// Expect prefix search to match only names starting with the query
    #[tokio::test]
    async fn search_by_prefix_matches_start_of_name() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &[]).await?;

        let user_repository = UserRepository::new(&test.db);
        user_repository
            .create("alice", "alice@example.com", role.id)
            .await?;
        user_repository
            .create("albert", "albert@example.com", role.id)
            .await?;
        user_repository
            .create("bob", "bob@example.com", role.id)
            .await?;

        let results = user_repository.search_by_prefix("al").await?;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|u| u.name.starts_with("al")));

        Ok(())
    }

    /// Expect permission names to reflect the user's role exactly
    #[tokio::test]
    async fn permission_names_follow_role() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &["team.read", "reservation.create"]).await?;
        let other = seed_role(&test.db, "auditor", &["team.read.elevated"]).await?;

        let user_repository = UserRepository::new(&test.db);
        let user = user_repository
            .create("alice", "alice@example.com", role.id)
            .await?;
        let _ = other;

        let mut names = user_repository.permission_names(&user).await?;
        names.sort();

        assert_eq!(names, vec!["reservation.create", "team.read"]);

        Ok(())
    }

    /// Expect a duplicate user name to be rejected by the unique constraint
    #[tokio::test]
    async fn duplicate_name_is_rejected() -> Result<(), TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &[]).await?;

        let user_repository = UserRepository::new(&test.db);
        user_repository
            .create("alice", "alice@example.com", role.id)
            .await?;

        let result = user_repository
            .create("alice", "other@example.com", role.id)
            .await;

        assert!(matches!(result, Err(DbErr::Exec(_)) | Err(DbErr::Query(_))));

        Ok(())
    }
}
