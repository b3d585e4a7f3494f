//! Room and feature CRUD. These endpoints are unauthenticated: rooms are
//! public infrastructure, inputs to the scheduler rather than guarded
//! resources.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::TransactionTrait;

use crate::{
    data::{reservation::ReservationRepository, room::RoomRepository},
    error::{validation::ValidationError, Error},
    model::{
        api::{CreateRoomRequest, FeatureDto, RoomDetailDto, RoomDto, UpdateRoomRequest},
        app::AppState,
    },
};

pub async fn list_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let rooms = RoomRepository::new(&state.db).list().await?;
    let dtos: Vec<RoomDto> = rooms.iter().map(RoomDto::from).collect();

    Ok(Json(dtos))
}

pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, Error> {
    let number = request
        .number
        .ok_or(ValidationError::MissingParameter("number"))?;

    let room = RoomRepository::new(&state.db)
        .create(&number)
        .await
        .map_err(|err| Error::uniqueness(err, "room number"))?;

    Ok((StatusCode::CREATED, Json(RoomDto::from(&room))))
}

/// Get a room with its feature list
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let room_repository = RoomRepository::new(&state.db);

    let room = room_repository
        .find_by_id(room_id)
        .await?
        .ok_or(ValidationError::NotFound("room"))?;

    let features = room_repository
        .features_of(room.id)
        .await?
        .iter()
        .map(FeatureDto::from)
        .collect();

    Ok(Json(RoomDetailDto {
        id: room.id,
        number: room.number,
        features,
    }))
}

/// Update a room's number and/or replace its feature set
pub async fn update_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
    Json(request): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, Error> {
    let room_repository = RoomRepository::new(&state.db);

    let room = room_repository
        .find_by_id(room_id)
        .await?
        .ok_or(ValidationError::NotFound("room"))?;

    if let Some(feature_ids) = &request.features {
        let found = room_repository.find_features_by_ids(feature_ids).await?;
        if found.len() != feature_ids.len() {
            return Err(ValidationError::InvalidReference("feature").into());
        }

        room_repository.set_features(room.id, feature_ids).await?;
    }

    if let Some(number) = &request.number {
        room_repository
            .update_number(room, number)
            .await
            .map_err(|err| Error::uniqueness(err, "room number"))?;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a room together with its reservations and feature assignments
pub async fn delete_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    RoomRepository::new(&state.db)
        .find_by_id(room_id)
        .await?
        .ok_or(ValidationError::NotFound("room"))?;

    state
        .db
        .transaction::<_, (), Error>(move |txn| {
            Box::pin(async move {
                ReservationRepository::new(txn).delete_by_room(room_id).await?;

                let room_repository = RoomRepository::new(txn);
                room_repository.set_features(room_id, &[]).await?;
                room_repository.delete(room_id).await?;

                Ok(())
            })
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_features(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let features = RoomRepository::new(&state.db).list_features().await?;
    let dtos: Vec<FeatureDto> = features.iter().map(FeatureDto::from).collect();

    Ok(Json(dtos))
}
