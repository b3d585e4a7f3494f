//! End-to-end tests for the scheduling engine: overlap detection,
//! classification by priority tier, and the override commit protocol.

use sea_orm::EntityTrait;
use teamroom::{
    model::{auth::AuthenticatedUser, lock::KeyedLocks},
    service::{
        access::PermissionSet,
        reservation::{ReservationRequest, ReservationService, ScheduleOutcome},
    },
};
use teamroom_test_utils::prelude::*;

struct Stage {
    test: TestSetup,
    /// Tier 0 team owned by `low`.
    single_team_id: i32,
    /// Tier 1 team owned by `high`.
    other_team_id: i32,
    other_type_id: i32,
    low: AuthenticatedUser,
    high: AuthenticatedUser,
    room_id: i32,
}

async fn stage() -> Result<Stage, TestError> {
    let test = TestSetup::with_all_tables().await?;

    let role = seed_role(
        &test.db,
        "student",
        &[
            "reservation.create",
            "reservation.update",
            "reservation.delete",
        ],
    )
    .await?;
    let single = seed_team_type(&test.db, "single", 0, 7).await?;
    let other = seed_team_type(&test.db, "other_team", 1, 30).await?;

    let low_user = seed_user(&test.db, "low", role.id).await?;
    let high_user = seed_user(&test.db, "high", role.id).await?;

    let single_team = seed_team(&test.db, "low", single.id, &[low_user.id]).await?;
    let other_team = seed_team(&test.db, "blue", other.id, &[high_user.id]).await?;

    let room = seed_room(&test.db, "R101").await?;

    let permissions = || {
        PermissionSet::from_names([
            "reservation.create",
            "reservation.update",
            "reservation.delete",
        ])
    };

    Ok(Stage {
        single_team_id: single_team.id,
        other_team_id: other_team.id,
        other_type_id: other.id,
        low: AuthenticatedUser {
            user: low_user,
            permissions: permissions(),
        },
        high: AuthenticatedUser {
            user: high_user,
            permissions: permissions(),
        },
        room_id: room.id,
        test,
    })
}

fn service(stage: &Stage) -> ReservationService {
    ReservationService::new(stage.test.db.clone(), KeyedLocks::new())
}

async fn reservation_count(stage: &Stage) -> Result<usize, TestError> {
    Ok(entity::prelude::Reservation::find()
        .all(&stage.test.db)
        .await?
        .len())
}

/// A higher-tier candidate over a lower-tier booking is reported as
/// overridable, and the override displaces exactly the clashing booking.
#[tokio::test]
async fn higher_tier_override_displaces_conflicts() -> Result<(), TestError> {
    let stage = stage().await?;
    let reservation_service = service(&stage);

    let clashing = seed_reservation(
        &stage.test.db,
        stage.room_id,
        stage.single_team_id,
        stage.low.user.id,
        hour(10),
        hour(12),
    )
    .await?;
    let untouched = seed_reservation(
        &stage.test.db,
        stage.room_id,
        stage.single_team_id,
        stage.low.user.id,
        hour(14),
        hour(15),
    )
    .await?;

    let request = ReservationRequest {
        team_id: stage.other_team_id,
        room_id: stage.room_id,
        start: hour(10),
        end: hour(11),
    };

    let first = reservation_service
        .create(&stage.high, request, false)
        .await
        .unwrap();
    assert!(matches!(
        first,
        ScheduleOutcome::Conflict { overridable: true }
    ));
    assert_eq!(reservation_count(&stage).await?, 2);

    let second = reservation_service
        .create(&stage.high, request, true)
        .await
        .unwrap();
    let committed = match second {
        ScheduleOutcome::Committed(reservation) => reservation,
        other => panic!("expected commit, got {:?}", other),
    };

    let remaining = entity::prelude::Reservation::find()
        .all(&stage.test.db)
        .await?;
    let ids: Vec<i32> = remaining.iter().map(|r| r.id).collect();

    assert_eq!(remaining.len(), 2);
    assert!(ids.contains(&committed.id));
    assert!(ids.contains(&untouched.id));
    assert!(!ids.contains(&clashing.id));

    Ok(())
}

/// An equal-tier clash is never overridable; the override flag is ignored
/// and the existing booking survives.
#[tokio::test]
async fn equal_tier_conflict_is_immune_to_override() -> Result<(), TestError> {
    let stage = stage().await?;
    let reservation_service = service(&stage);

    // Same tier as the candidate's team.
    let rival_team = seed_team(
        &stage.test.db,
        "red",
        stage.other_type_id,
        &[stage.low.user.id],
    )
    .await?;

    let existing = seed_reservation(
        &stage.test.db,
        stage.room_id,
        rival_team.id,
        stage.low.user.id,
        hour(10),
        hour(11),
    )
    .await?;

    let request = ReservationRequest {
        team_id: stage.other_team_id,
        room_id: stage.room_id,
        start: hour(10),
        end: hour(12),
    };

    for override_requested in [false, true] {
        let outcome = reservation_service
            .create(&stage.high, request, override_requested)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            ScheduleOutcome::Conflict { overridable: false }
        ));
    }

    let remaining = entity::prelude::Reservation::find()
        .all(&stage.test.db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, existing.id);

    Ok(())
}

/// Back-to-back bookings share a boundary instant without clashing.
#[tokio::test]
async fn back_to_back_bookings_commit() -> Result<(), TestError> {
    let stage = stage().await?;
    let reservation_service = service(&stage);

    seed_reservation(
        &stage.test.db,
        stage.room_id,
        stage.single_team_id,
        stage.low.user.id,
        hour(10),
        hour(11),
    )
    .await?;

    let outcome = reservation_service
        .create(
            &stage.high,
            ReservationRequest {
                team_id: stage.other_team_id,
                room_id: stage.room_id,
                start: hour(11),
                end: hour(12),
            },
            false,
        )
        .await
        .unwrap();

    assert!(matches!(outcome, ScheduleOutcome::Committed(_)));
    assert_eq!(reservation_count(&stage).await?, 2);

    Ok(())
}

/// Classification without override mutates nothing and is repeatable.
#[tokio::test]
async fn declined_override_leaves_state_untouched() -> Result<(), TestError> {
    let stage = stage().await?;
    let reservation_service = service(&stage);

    let existing = seed_reservation(
        &stage.test.db,
        stage.room_id,
        stage.single_team_id,
        stage.low.user.id,
        hour(10),
        hour(12),
    )
    .await?;

    let request = ReservationRequest {
        team_id: stage.other_team_id,
        room_id: stage.room_id,
        start: hour(11),
        end: hour(13),
    };

    for _ in 0..2 {
        let outcome = reservation_service
            .create(&stage.high, request, false)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            ScheduleOutcome::Conflict { overridable: true }
        ));
    }

    let remaining = entity::prelude::Reservation::find()
        .all(&stage.test.db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, existing.id);
    assert_eq!(remaining[0].start, hour(10));
    assert_eq!(remaining[0].end, hour(12));

    Ok(())
}

/// Updating a reservation excludes it from its own conflict set, so a pure
/// resize inside its old window commits.
#[tokio::test]
async fn update_ignores_own_window() -> Result<(), TestError> {
    let stage = stage().await?;
    let reservation_service = service(&stage);

    let existing = seed_reservation(
        &stage.test.db,
        stage.room_id,
        stage.other_team_id,
        stage.high.user.id,
        hour(10),
        hour(12),
    )
    .await?;

    let outcome = reservation_service
        .update(
            &stage.high,
            existing.id,
            stage.room_id,
            hour(10),
            hour(11),
            false,
        )
        .await
        .unwrap();

    match outcome {
        ScheduleOutcome::Committed(updated) => {
            assert_eq!(updated.id, existing.id);
            assert_eq!(updated.end, hour(11));
        }
        other => panic!("expected commit, got {:?}", other),
    }

    Ok(())
}
