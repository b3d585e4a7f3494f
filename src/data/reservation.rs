use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QuerySelect, QueryTrait, RelationTrait,
};

use crate::model::db::ReservationModel;

/// An existing reservation that intersects a candidate's window, carrying
/// the priority tier of its owning team for classification.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ConflictingReservation {
    pub id: i32,
    pub room_id: i32,
    pub team_id: i32,
    pub created_by_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub priority: i32,
}

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        room_id: i32,
        team_id: i32,
        created_by_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ReservationModel, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            room_id: ActiveValue::Set(room_id),
            team_id: ActiveValue::Set(team_id),
            created_by_id: ActiveValue::Set(created_by_id),
            start: ActiveValue::Set(start),
            end: ActiveValue::Set(end),
            ..Default::default()
        };

        reservation.insert(self.db).await
    }

    pub async fn find_by_id(&self, reservation_id: i32) -> Result<Option<ReservationModel>, DbErr> {
        entity::prelude::Reservation::find_by_id(reservation_id)
            .one(self.db)
            .await
    }

    pub async fn update_booking(
        &self,
        reservation: ReservationModel,
        room_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ReservationModel, DbErr> {
        let mut reservation: entity::reservation::ActiveModel = reservation.into();
        reservation.room_id = ActiveValue::Set(room_id);
        reservation.start = ActiveValue::Set(start);
        reservation.end = ActiveValue::Set(end);

        reservation.update(self.db).await
    }

    pub async fn delete(&self, reservation_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_by_id(reservation_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_many(&self, reservation_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::Id.is_in(reservation_ids.to_vec()))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_room(&self, room_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_team(&self, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await
    }

    /// Finds reservations in the room intersecting the half-open window
    /// `[start, end)`, joined with their owning team's priority tier.
    ///
    /// `exclude` removes the reservation under revision from its own
    /// conflict set. Back-to-back bookings (`existing.end == start`) do not
    /// intersect.
    pub async fn find_overlapping(
        &self,
        room_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude: Option<i32>,
    ) -> Result<Vec<ConflictingReservation>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::Start.lt(end))
            .filter(entity::reservation::Column::End.gt(start))
            .apply_if(exclude, |query, reservation_id| {
                query.filter(entity::reservation::Column::Id.ne(reservation_id))
            })
            .join(JoinType::InnerJoin, entity::reservation::Relation::Team.def())
            .join(JoinType::InnerJoin, entity::team::Relation::TeamType.def())
            .column_as(entity::team_type::Column::Priority, "priority")
            .into_model::<ConflictingReservation>()
            .all(self.db)
            .await
    }

    /// Reservations in any room intersecting `[start, end)`
    pub async fn in_window(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<ReservationModel>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Start.lt(end))
            .filter(entity::reservation::Column::End.gt(start))
            .all(self.db)
            .await
    }

    /// Reservations that have not yet ended at the given instant
    pub async fn ending_after(&self, instant: NaiveDateTime) -> Result<Vec<ReservationModel>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::End.gt(instant))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use teamroom_test_utils::prelude::*;

    use crate::data::reservation::ReservationRepository;

    struct Fixture {
        test: TestSetup,
        room_id: i32,
        team_id: i32,
        user_id: i32,
    }

    async fn setup() -> Result<Fixture, TestError> {
        let test = TestSetup::with_all_tables().await?;
        let role = seed_role(&test.db, "student", &[]).await?;
        let team_type = seed_team_type(&test.db, "other_team", 1, 30).await?;
        let user = seed_user(&test.db, "alice", role.id).await?;
        let team = seed_team(&test.db, "blue", team_type.id, &[user.id]).await?;
        let room = seed_room(&test.db, "R101").await?;

        Ok(Fixture {
            room_id: room.id,
            team_id: team.id,
            user_id: user.id,
            test,
        })
    }

    /// Expect a booking strictly inside another's window to intersect it
    #[tokio::test]
    async fn contained_window_overlaps() -> Result<(), TestError> {
        let f = setup().await?;
        let repository = ReservationRepository::new(&f.test.db);

        let existing = repository
            .create(f.room_id, f.team_id, f.user_id, hour(10), hour(12))
            .await?;

        let overlapping = repository
            .find_overlapping(f.room_id, hour(10), hour(11), None)
            .await?;

        assert_eq!(overlapping.len(), 1);
        assert_eq!(overlapping[0].id, existing.id);
        assert_eq!(overlapping[0].priority, 1);

        Ok(())
    }

    /// Expect back-to-back windows not to intersect (half-open semantics)
    #[tokio::test]
    async fn touching_windows_do_not_overlap() -> Result<(), TestError> {
        let f = setup().await?;
        let repository = ReservationRepository::new(&f.test.db);

        repository
            .create(f.room_id, f.team_id, f.user_id, hour(10), hour(11))
            .await?;

        let before = repository
            .find_overlapping(f.room_id, hour(9), hour(10), None)
            .await?;
        let after = repository
            .find_overlapping(f.room_id, hour(11), hour(12), None)
            .await?;

        assert!(before.is_empty());
        assert!(after.is_empty());

        Ok(())
    }

    /// Expect a reservation in another room to be ignored
    #[tokio::test]
    async fn other_room_is_ignored() -> Result<(), TestError> {
        let f = setup().await?;
        let other_room = seed_room(&f.test.db, "R102").await?;
        let repository = ReservationRepository::new(&f.test.db);

        repository
            .create(other_room.id, f.team_id, f.user_id, hour(10), hour(11))
            .await?;

        let overlapping = repository
            .find_overlapping(f.room_id, hour(10), hour(11), None)
            .await?;

        assert!(overlapping.is_empty());

        Ok(())
    }

    /// Expect the reservation under revision to be excluded from its own
    /// conflict set
    #[tokio::test]
    async fn exclusion_removes_own_row() -> Result<(), TestError> {
        let f = setup().await?;
        let repository = ReservationRepository::new(&f.test.db);

        let existing = repository
            .create(f.room_id, f.team_id, f.user_id, hour(10), hour(11))
            .await?;

        let overlapping = repository
            .find_overlapping(f.room_id, hour(10), hour(11), Some(existing.id))
            .await?;

        assert!(overlapping.is_empty());

        Ok(())
    }
}
