//! Team lifecycle and membership rules.
//!
//! `single` teams are the personal team every user gets on registration;
//! they cannot be deleted and their membership never changes. Membership
//! mutation and deletion hold the per-team lock so concurrent changes to
//! one team serialize.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{reservation::ReservationRepository, team::TeamRepository, user::UserRepository},
    error::{access::AccessError, team::TeamError, validation::ValidationError, Error},
    model::{
        api::{TeamDto, UserSummaryDto},
        auth::AuthenticatedUser,
        db::{TeamModel, TeamTypeModel},
        lock::KeyedLocks,
    },
    service::access::{self, Capability},
};

const TEAM_TYPE_SINGLE: &str = "single";
const TEAM_TYPE_DEFAULT: &str = "other_team";

/// Builds the team payload the actor is allowed to see: id and type always,
/// name, advance time and members only with read access to the team.
pub(crate) async fn visible_team_dto<C: ConnectionTrait>(
    db: &C,
    actor: &AuthenticatedUser,
    team: TeamModel,
    team_type: TeamTypeModel,
) -> Result<TeamDto, Error> {
    let team_repository = TeamRepository::new(db);
    let is_member = team_repository.has_member(team.id, actor.user.id).await?;

    if !actor.permissions.allows(Capability::TeamRead, is_member) {
        return Ok(TeamDto {
            id: team.id,
            team_type: team_type.name,
            name: None,
            advance_time: None,
            members: None,
        });
    }

    let members = team_repository
        .members(team.id)
        .await?
        .iter()
        .map(UserSummaryDto::from)
        .collect();

    Ok(TeamDto {
        id: team.id,
        team_type: team_type.name,
        name: Some(team.name),
        advance_time: Some(team_type.advance_time),
        members: Some(members),
    })
}

pub struct TeamService {
    db: DatabaseConnection,
    team_locks: KeyedLocks,
}

impl TeamService {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: DatabaseConnection, team_locks: KeyedLocks) -> Self {
        Self { db, team_locks }
    }

    /// Creates a team and enrolls the creator as its first member.
    ///
    /// The default `other_team` type needs `team.create` in either form;
    /// any other type is reserved to holders of the elevated grant.
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        name: &str,
        team_type_name: Option<&str>,
    ) -> Result<TeamModel, Error> {
        let type_name = team_type_name.unwrap_or(TEAM_TYPE_DEFAULT);

        let team_type = TeamRepository::new(&self.db)
            .find_type_by_name(type_name)
            .await?
            .ok_or(ValidationError::UnknownTeamType)?;

        let permitted = if team_type.name == TEAM_TYPE_DEFAULT {
            actor.permissions.allows(Capability::TeamCreate, true)
        } else {
            actor.permissions.allows_elevated(Capability::TeamCreate)
        };
        if !permitted {
            return Err(AccessError::TeamCreationDenied.into());
        }

        let name = name.to_string();
        let creator_id = actor.user.id;

        let team = self
            .db
            .transaction::<_, TeamModel, Error>(|txn| {
                Box::pin(async move {
                    let team_repository = TeamRepository::new(txn);

                    let team = team_repository
                        .create(&name, team_type.id)
                        .await
                        .map_err(|err| Error::uniqueness(err, "team name"))?;
                    team_repository.add_member(team.id, creator_id).await?;

                    Ok(team)
                })
            })
            .await?;

        tracing::info!(team_id = team.id, "created team");

        Ok(team)
    }

    pub async fn read(
        &self,
        actor: &AuthenticatedUser,
        team_id: i32,
    ) -> Result<TeamDto, Error> {
        let (team, team_type) = TeamRepository::new(&self.db)
            .find_with_type(team_id)
            .await?
            .ok_or(ValidationError::NotFound("team"))?;

        visible_team_dto(&self.db, actor, team, team_type).await
    }

    pub async fn rename(
        &self,
        actor: &AuthenticatedUser,
        team_id: i32,
        name: &str,
    ) -> Result<(), Error> {
        let team_repository = TeamRepository::new(&self.db);

        let team = team_repository
            .find_by_id(team_id)
            .await?
            .ok_or(ValidationError::NotFound("team"))?;

        let is_member = team_repository.has_member(team.id, actor.user.id).await?;
        access::require(&actor.permissions, Capability::TeamUpdate, is_member)?;

        team_repository
            .rename(team, name)
            .await
            .map_err(|err| Error::uniqueness(err, "team name"))?;

        Ok(())
    }

    /// Deletes a team with its reservations and memberships, atomically.
    /// `single` teams are refused regardless of the caller's grants.
    pub async fn delete(&self, actor: &AuthenticatedUser, team_id: i32) -> Result<(), Error> {
        let _guard = self.team_locks.acquire(team_id).await;

        let team_repository = TeamRepository::new(&self.db);

        let (team, team_type) = team_repository
            .find_with_type(team_id)
            .await?
            .ok_or(ValidationError::NotFound("team"))?;

        let is_member = team_repository.has_member(team.id, actor.user.id).await?;
        access::require(&actor.permissions, Capability::TeamDelete, is_member)?;

        if team_type.name == TEAM_TYPE_SINGLE {
            return Err(TeamError::SingleTeamUndeletable.into());
        }

        self.db
            .transaction::<_, (), Error>(move |txn| {
                Box::pin(async move {
                    ReservationRepository::new(txn).delete_by_team(team.id).await?;

                    let team_repository = TeamRepository::new(txn);
                    team_repository.remove_all_members(team.id).await?;
                    team_repository.delete(team.id).await?;

                    Ok(())
                })
            })
            .await?;

        tracing::info!(team_id, "deleted team");

        Ok(())
    }

    pub async fn add_member(
        &self,
        actor: &AuthenticatedUser,
        team_id: i32,
        user_id: i32,
    ) -> Result<(), Error> {
        let _guard = self.team_locks.acquire(team_id).await;

        let team_repository = TeamRepository::new(&self.db);

        let (team, team_type) = team_repository
            .find_with_type(team_id)
            .await?
            .ok_or(ValidationError::NotFound("team"))?;

        let is_member = team_repository.has_member(team.id, actor.user.id).await?;
        access::require(&actor.permissions, Capability::TeamUpdate, is_member)?;

        if team_type.name == TEAM_TYPE_SINGLE {
            return Err(TeamError::SingleTeamMembershipFixed.into());
        }

        UserRepository::new(&self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(ValidationError::InvalidReference("user"))?;

        if team_repository.has_member(team.id, user_id).await? {
            return Err(TeamError::AlreadyMember.into());
        }

        team_repository.add_member(team.id, user_id).await?;

        Ok(())
    }

    pub async fn remove_member(
        &self,
        actor: &AuthenticatedUser,
        team_id: i32,
        user_id: i32,
    ) -> Result<(), Error> {
        let _guard = self.team_locks.acquire(team_id).await;

        let team_repository = TeamRepository::new(&self.db);

        let (team, team_type) = team_repository
            .find_with_type(team_id)
            .await?
            .ok_or(ValidationError::NotFound("team"))?;

        if !team_repository.has_member(team.id, user_id).await? {
            return Err(ValidationError::InvalidReference("user").into());
        }

        // Emptying a team is only possible by deleting it.
        if team_repository.member_count(team.id).await? <= 1 {
            return Err(TeamError::LastMember.into());
        }

        let is_member = team_repository.has_member(team.id, actor.user.id).await?;
        access::require(&actor.permissions, Capability::TeamUpdate, is_member)?;

        if team_type.name == TEAM_TYPE_SINGLE {
            return Err(TeamError::SingleTeamMembershipFixed.into());
        }

        team_repository.remove_member(team.id, user_id).await?;

        Ok(())
    }
}
