use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    controller::parse_time,
    error::{validation::ValidationError, Error},
    model::{
        api::{ConflictDto, CreateReservationRequest, UpdateReservationRequest},
        app::AppState,
        auth::AuthenticatedUser,
    },
    service::reservation::{ReservationRequest, ReservationService, ScheduleOutcome},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Book a room for a team; 409 with an `overridable` flag on a clash
pub async fn create_reservation(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Json(request): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, Error> {
    let team_id = request
        .team_id
        .ok_or(ValidationError::MissingParameter("team_id"))?;
    let room_id = request
        .room_id
        .ok_or(ValidationError::MissingParameter("room_id"))?;
    let start = request
        .start
        .ok_or(ValidationError::MissingParameter("start"))?;
    let end = request
        .end
        .ok_or(ValidationError::MissingParameter("end"))?;

    let booking = ReservationRequest {
        team_id,
        room_id,
        start: parse_time(&start)?,
        end: parse_time(&end)?,
    };

    let reservation_service = ReservationService::new(state.db.clone(), state.room_locks.clone());
    let outcome = reservation_service
        .create(&actor, booking, request.r#override)
        .await?;

    match outcome {
        ScheduleOutcome::Committed(reservation) => {
            let dto = reservation_service.detail(&actor, reservation.id).await?;

            Ok((StatusCode::CREATED, Json(dto)).into_response())
        }
        ScheduleOutcome::Conflict { overridable } => {
            Ok((StatusCode::CONFLICT, Json(ConflictDto { overridable })).into_response())
        }
    }
}

pub async fn get_reservation(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reservation_service = ReservationService::new(state.db.clone(), state.room_locks.clone());
    let dto = reservation_service.detail(&actor, reservation_id).await?;

    Ok(Json(dto))
}

/// Move or resize a reservation, running the same conflict pipeline as
/// creation with the reservation itself excluded from the overlap set
pub async fn update_reservation(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(reservation_id): Path<i32>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<impl IntoResponse, Error> {
    let room_id = request
        .room_id
        .ok_or(ValidationError::MissingParameter("room_id"))?;
    let start = request
        .start
        .ok_or(ValidationError::MissingParameter("start"))?;
    let end = request
        .end
        .ok_or(ValidationError::MissingParameter("end"))?;

    let reservation_service = ReservationService::new(state.db.clone(), state.room_locks.clone());
    let outcome = reservation_service
        .update(
            &actor,
            reservation_id,
            room_id,
            parse_time(&start)?,
            parse_time(&end)?,
            request.r#override,
        )
        .await?;

    match outcome {
        ScheduleOutcome::Committed(_) => Ok(StatusCode::NO_CONTENT.into_response()),
        ScheduleOutcome::Conflict { overridable } => {
            Ok((StatusCode::CONFLICT, Json(ConflictDto { overridable })).into_response())
        }
    }
}

pub async fn delete_reservation(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reservation_service = ReservationService::new(state.db.clone(), state.room_locks.clone());
    reservation_service.delete(&actor, reservation_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List reservations in a window, or all not-yet-ended ones without bounds
pub async fn list_reservations(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, Error> {
    let window = match (query.start, query.end) {
        (Some(start), Some(end)) => Some((parse_time(&start)?, parse_time(&end)?)),
        (None, None) => None,
        _ => return Err(ValidationError::MissingParameter("start and end").into()),
    };

    let reservation_service = ReservationService::new(state.db.clone(), state.room_locks.clone());
    let dtos = reservation_service.list(&actor, window).await?;

    Ok(Json(dtos))
}
