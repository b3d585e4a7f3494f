use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::{validation::ValidationError, Error},
    model::{
        api::{CreateTeamRequest, UpdateTeamRequest},
        app::AppState,
        auth::AuthenticatedUser,
    },
    service::team::TeamService,
};

/// Create a team; the creator becomes its first member
pub async fn create_team(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Json(request): Json<CreateTeamRequest>,
) -> Result<impl IntoResponse, Error> {
    let name = request
        .name
        .ok_or(ValidationError::MissingParameter("name"))?;

    let team_service = TeamService::new(state.db.clone(), state.team_locks.clone());
    let team = team_service
        .create(&actor, &name, request.team_type.as_deref())
        .await?;

    // The creator is a member, so the read-back is the full payload.
    let dto = team_service.read(&actor, team.id).await?;

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Get a team; fields beyond id and type require read access
pub async fn get_team(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(state.db.clone(), state.team_locks.clone());
    let dto = team_service.read(&actor, team_id).await?;

    Ok(Json(dto))
}

/// Rename a team
pub async fn update_team(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(team_id): Path<i32>,
    Json(request): Json<UpdateTeamRequest>,
) -> Result<impl IntoResponse, Error> {
    let name = request
        .name
        .ok_or(ValidationError::MissingParameter("name"))?;

    let team_service = TeamService::new(state.db.clone(), state.team_locks.clone());
    team_service.rename(&actor, team_id, &name).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a team together with its reservations and memberships
pub async fn delete_team(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(state.db.clone(), state.team_locks.clone());
    team_service.delete(&actor, team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to a team
pub async fn add_team_member(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(state.db.clone(), state.team_locks.clone());
    team_service.add_member(&actor, team_id, user_id).await?;

    Ok(StatusCode::CREATED)
}

/// Remove a user from a team
pub async fn remove_team_member(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path((team_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let team_service = TeamService::new(state.db.clone(), state.team_locks.clone());
    team_service.remove_member(&actor, team_id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
