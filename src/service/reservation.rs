//! Reservation scheduling: validation, authorization, and the conflict
//! commit protocol.
//!
//! Scheduling holds the per-room lock across the overlap query,
//! classification, and commit, so two racing candidates for one room cannot
//! both observe a free window. Displacing lower-tier reservations happens in
//! one transaction with the insert or update; a failure rolls everything
//! back.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{reservation::ReservationRepository, room::RoomRepository, team::TeamRepository},
    error::{validation::ValidationError, Error},
    model::{
        api::{ReservationDto, RoomDto},
        auth::AuthenticatedUser,
        db::ReservationModel,
        lock::KeyedLocks,
    },
    service::{
        access::{self, Capability},
        conflict::{classify, ConflictStatus},
        team::visible_team_dto,
    },
};

/// A validated booking window for a team in a room.
#[derive(Debug, Clone, Copy)]
pub struct ReservationRequest {
    pub team_id: i32,
    pub room_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Result of a scheduling attempt.
#[derive(Debug)]
pub enum ScheduleOutcome {
    Committed(ReservationModel),
    /// The window clashes. `overridable` tells the caller whether repeating
    /// the request with `override: true` would displace the clash.
    Conflict { overridable: bool },
}

pub struct ReservationService {
    db: DatabaseConnection,
    room_locks: KeyedLocks,
}

impl ReservationService {
    /// Creates a new instance of [`ReservationService`]
    pub fn new(db: DatabaseConnection, room_locks: KeyedLocks) -> Self {
        Self { db, room_locks }
    }

    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        request: ReservationRequest,
        override_requested: bool,
    ) -> Result<ScheduleOutcome, Error> {
        if request.start >= request.end {
            return Err(ValidationError::StartNotBeforeEnd.into());
        }

        let team_repository = TeamRepository::new(&self.db);
        let (team, team_type) = team_repository
            .find_with_type(request.team_id)
            .await?
            .ok_or(ValidationError::InvalidReference("team"))?;

        RoomRepository::new(&self.db)
            .find_by_id(request.room_id)
            .await?
            .ok_or(ValidationError::InvalidReference("room"))?;

        let is_member = team_repository.has_member(team.id, actor.user.id).await?;
        access::require(&actor.permissions, Capability::ReservationCreate, is_member)?;

        let _guard = self.room_locks.acquire(request.room_id).await;

        let conflicts = ReservationRepository::new(&self.db)
            .find_overlapping(request.room_id, request.start, request.end, None)
            .await?;

        match classify(team_type.priority, &conflicts) {
            ConflictStatus::NoConflict => {
                let reservation = ReservationRepository::new(&self.db)
                    .create(
                        request.room_id,
                        request.team_id,
                        actor.user.id,
                        request.start,
                        request.end,
                    )
                    .await?;

                Ok(ScheduleOutcome::Committed(reservation))
            }
            ConflictStatus::Overridable if override_requested => {
                let displaced: Vec<i32> = conflicts.iter().map(|c| c.id).collect();
                let created_by_id = actor.user.id;

                let reservation = self
                    .db
                    .transaction::<_, ReservationModel, Error>(move |txn| {
                        Box::pin(async move {
                            let reservation_repository = ReservationRepository::new(txn);

                            reservation_repository.delete_many(&displaced).await?;
                            let reservation = reservation_repository
                                .create(
                                    request.room_id,
                                    request.team_id,
                                    created_by_id,
                                    request.start,
                                    request.end,
                                )
                                .await?;

                            Ok(reservation)
                        })
                    })
                    .await?;

                tracing::info!(
                    reservation_id = reservation.id,
                    displaced = conflicts.len(),
                    "committed reservation by override"
                );

                Ok(ScheduleOutcome::Committed(reservation))
            }
            ConflictStatus::Overridable => Ok(ScheduleOutcome::Conflict { overridable: true }),
            ConflictStatus::Failure => Ok(ScheduleOutcome::Conflict { overridable: false }),
        }
    }

    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        reservation_id: i32,
        room_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
        override_requested: bool,
    ) -> Result<ScheduleOutcome, Error> {
        if start >= end {
            return Err(ValidationError::StartNotBeforeEnd.into());
        }

        let reservation = ReservationRepository::new(&self.db)
            .find_by_id(reservation_id)
            .await?
            .ok_or(ValidationError::NotFound("reservation"))?;

        RoomRepository::new(&self.db)
            .find_by_id(room_id)
            .await?
            .ok_or(ValidationError::InvalidReference("room"))?;

        let team_repository = TeamRepository::new(&self.db);
        let (team, team_type) = team_repository
            .find_with_type(reservation.team_id)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!(
                    "team {} of reservation {}",
                    reservation.team_id, reservation.id
                ))
            })?;

        let is_member = team_repository.has_member(team.id, actor.user.id).await?;
        access::require(&actor.permissions, Capability::ReservationUpdate, is_member)?;

        let _guard = self.room_locks.acquire(room_id).await;

        let conflicts = ReservationRepository::new(&self.db)
            .find_overlapping(room_id, start, end, Some(reservation.id))
            .await?;

        match classify(team_type.priority, &conflicts) {
            ConflictStatus::NoConflict => {
                let updated = ReservationRepository::new(&self.db)
                    .update_booking(reservation, room_id, start, end)
                    .await?;

                Ok(ScheduleOutcome::Committed(updated))
            }
            ConflictStatus::Overridable if override_requested => {
                let displaced: Vec<i32> = conflicts.iter().map(|c| c.id).collect();

                let updated = self
                    .db
                    .transaction::<_, ReservationModel, Error>(move |txn| {
                        Box::pin(async move {
                            let reservation_repository = ReservationRepository::new(txn);

                            reservation_repository.delete_many(&displaced).await?;
                            let updated = reservation_repository
                                .update_booking(reservation, room_id, start, end)
                                .await?;

                            Ok(updated)
                        })
                    })
                    .await?;

                tracing::info!(
                    reservation_id = updated.id,
                    displaced = conflicts.len(),
                    "rescheduled reservation by override"
                );

                Ok(ScheduleOutcome::Committed(updated))
            }
            ConflictStatus::Overridable => Ok(ScheduleOutcome::Conflict { overridable: true }),
            ConflictStatus::Failure => Ok(ScheduleOutcome::Conflict { overridable: false }),
        }
    }

    /// Deletes a reservation. No conflict logic; freeing a window cannot
    /// clash with anything.
    pub async fn delete(&self, actor: &AuthenticatedUser, reservation_id: i32) -> Result<(), Error> {
        let reservation_repository = ReservationRepository::new(&self.db);

        let reservation = reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or(ValidationError::NotFound("reservation"))?;

        let is_member = TeamRepository::new(&self.db)
            .has_member(reservation.team_id, actor.user.id)
            .await?;
        access::require(&actor.permissions, Capability::ReservationDelete, is_member)?;

        reservation_repository.delete(reservation.id).await?;

        Ok(())
    }

    pub async fn detail(
        &self,
        actor: &AuthenticatedUser,
        reservation_id: i32,
    ) -> Result<ReservationDto, Error> {
        let reservation = ReservationRepository::new(&self.db)
            .find_by_id(reservation_id)
            .await?
            .ok_or(ValidationError::NotFound("reservation"))?;

        self.to_dto(actor, reservation).await
    }

    /// Lists reservations overlapping `[start, end)`, or every reservation
    /// that has not yet ended when no window is given.
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        window: Option<(NaiveDateTime, NaiveDateTime)>,
    ) -> Result<Vec<ReservationDto>, Error> {
        let reservation_repository = ReservationRepository::new(&self.db);

        let reservations = match window {
            Some((start, end)) => {
                if start >= end {
                    return Err(ValidationError::StartNotBeforeEnd.into());
                }
                reservation_repository.in_window(start, end).await?
            }
            None => {
                reservation_repository
                    .ending_after(Utc::now().naive_utc())
                    .await?
            }
        };

        let mut dtos = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            dtos.push(self.to_dto(actor, reservation).await?);
        }

        Ok(dtos)
    }

    async fn to_dto(
        &self,
        actor: &AuthenticatedUser,
        reservation: ReservationModel,
    ) -> Result<ReservationDto, Error> {
        let (team, team_type) = TeamRepository::new(&self.db)
            .find_with_type(reservation.team_id)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!(
                    "team {} of reservation {}",
                    reservation.team_id, reservation.id
                ))
            })?;

        let room = RoomRepository::new(&self.db)
            .find_by_id(reservation.room_id)
            .await?
            .ok_or_else(|| {
                sea_orm::DbErr::RecordNotFound(format!(
                    "room {} of reservation {}",
                    reservation.room_id, reservation.id
                ))
            })?;

        let team = visible_team_dto(&self.db, actor, team, team_type).await?;

        Ok(ReservationDto {
            id: reservation.id,
            team,
            room: RoomDto::from(&room),
            start: reservation.start,
            end: reservation.end,
        })
    }
}
