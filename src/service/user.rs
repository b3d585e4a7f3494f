use sea_orm::DatabaseConnection;

use crate::{
    data::{team::TeamRepository, user::UserRepository},
    error::{validation::ValidationError, Error},
    model::{
        api::{UserDetailDto, UserSummaryDto},
        auth::AuthenticatedUser,
    },
    service::team::visible_team_dto,
};

pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the user detail payload: profile, team summaries filtered
    /// by the actor's visibility, and the flattened permission names.
    pub async fn detail(
        &self,
        actor: &AuthenticatedUser,
        user_id: i32,
    ) -> Result<UserDetailDto, Error> {
        let user_repository = UserRepository::new(&self.db);

        let user = user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(ValidationError::NotFound("user"))?;

        let team_repository = TeamRepository::new(&self.db);
        let teams = team_repository.teams_of_user(user.id).await?;

        let mut team_dtos = Vec::with_capacity(teams.len());
        for team in teams {
            let (team, team_type) = team_repository
                .find_with_type(team.id)
                .await?
                .ok_or_else(|| {
                    sea_orm::DbErr::RecordNotFound(format!("type of team {}", team.id))
                })?;

            team_dtos.push(visible_team_dto(&self.db, actor, team, team_type).await?);
        }

        let permissions = user_repository.permission_names(&user).await?;

        Ok(UserDetailDto {
            id: user.id,
            name: user.name,
            email: user.email,
            teams: team_dtos,
            permissions,
        })
    }

    /// Name-prefix search, returning bare id/name pairs.
    pub async fn search(&self, prefix: &str) -> Result<Vec<UserSummaryDto>, Error> {
        let users = UserRepository::new(&self.db).search_by_prefix(prefix).await?;

        Ok(users.iter().map(UserSummaryDto::from).collect())
    }
}
