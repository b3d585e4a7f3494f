//! Tests for team lifecycle rules: single-team protection, membership
//! invariants, and the deletion cascade.

use sea_orm::EntityTrait;
use teamroom::{
    error::{team::TeamError, Error},
    model::{auth::AuthenticatedUser, lock::KeyedLocks},
    service::{access::PermissionSet, team::TeamService},
};
use teamroom_test_utils::prelude::*;

const FULL_TEAM_CAPS: [&str; 4] = ["team.create", "team.read", "team.update", "team.delete"];

struct Stage {
    test: TestSetup,
    single_type_id: i32,
    other_type_id: i32,
    actor: AuthenticatedUser,
    role_id: i32,
}

async fn stage() -> Result<Stage, TestError> {
    let test = TestSetup::with_all_tables().await?;

    let role = seed_role(&test.db, "student", &FULL_TEAM_CAPS).await?;
    let single = seed_team_type(&test.db, "single", 0, 7).await?;
    let other = seed_team_type(&test.db, "other_team", 1, 30).await?;
    let user = seed_user(&test.db, "alice", role.id).await?;

    Ok(Stage {
        single_type_id: single.id,
        other_type_id: other.id,
        actor: AuthenticatedUser {
            user,
            permissions: PermissionSet::from_names(FULL_TEAM_CAPS),
        },
        role_id: role.id,
        test,
    })
}

fn service(stage: &Stage) -> TeamService {
    TeamService::new(stage.test.db.clone(), KeyedLocks::new())
}

/// Personal teams survive every deletion attempt, even by their member.
#[tokio::test]
async fn single_team_cannot_be_deleted() -> Result<(), TestError> {
    let stage = stage().await?;
    let team = seed_team(
        &stage.test.db,
        "alice",
        stage.single_type_id,
        &[stage.actor.user.id],
    )
    .await?;

    let result = service(&stage).delete(&stage.actor, team.id).await;

    assert!(matches!(
        result,
        Err(Error::Team(TeamError::SingleTeamUndeletable))
    ));
    assert!(entity::prelude::Team::find_by_id(team.id)
        .one(&stage.test.db)
        .await?
        .is_some());

    Ok(())
}

/// Membership of a personal team never changes.
#[tokio::test]
async fn single_team_membership_is_fixed() -> Result<(), TestError> {
    let stage = stage().await?;
    let team = seed_team(
        &stage.test.db,
        "alice",
        stage.single_type_id,
        &[stage.actor.user.id],
    )
    .await?;
    let bob = seed_user(&stage.test.db, "bob", stage.role_id).await?;

    let result = service(&stage)
        .add_member(&stage.actor, team.id, bob.id)
        .await;

    assert!(matches!(
        result,
        Err(Error::Team(TeamError::SingleTeamMembershipFixed))
    ));

    Ok(())
}

/// Removing the last member is refused; the team must be deleted instead.
#[tokio::test]
async fn last_member_cannot_be_removed() -> Result<(), TestError> {
    let stage = stage().await?;
    let team = seed_team(
        &stage.test.db,
        "blue",
        stage.other_type_id,
        &[stage.actor.user.id],
    )
    .await?;

    let result = service(&stage)
        .remove_member(&stage.actor, team.id, stage.actor.user.id)
        .await;

    assert!(matches!(result, Err(Error::Team(TeamError::LastMember))));

    Ok(())
}

/// Enrolling an existing member reports the defined conflict, not a leaked
/// constraint error.
#[tokio::test]
async fn duplicate_membership_is_rejected() -> Result<(), TestError> {
    let stage = stage().await?;
    let bob = seed_user(&stage.test.db, "bob", stage.role_id).await?;
    let team = seed_team(
        &stage.test.db,
        "blue",
        stage.other_type_id,
        &[stage.actor.user.id, bob.id],
    )
    .await?;

    let result = service(&stage)
        .add_member(&stage.actor, team.id, bob.id)
        .await;

    assert!(matches!(result, Err(Error::Team(TeamError::AlreadyMember))));

    Ok(())
}

/// Deleting a team removes its reservations and memberships with it, and
/// leaves other teams' rows alone.
#[tokio::test]
async fn team_deletion_cascades() -> Result<(), TestError> {
    let stage = stage().await?;
    let team = seed_team(
        &stage.test.db,
        "blue",
        stage.other_type_id,
        &[stage.actor.user.id],
    )
    .await?;
    let other_team = seed_team(
        &stage.test.db,
        "red",
        stage.other_type_id,
        &[stage.actor.user.id],
    )
    .await?;
    let room = seed_room(&stage.test.db, "R101").await?;

    seed_reservation(
        &stage.test.db,
        room.id,
        team.id,
        stage.actor.user.id,
        hour(10),
        hour(11),
    )
    .await?;
    let surviving = seed_reservation(
        &stage.test.db,
        room.id,
        other_team.id,
        stage.actor.user.id,
        hour(12),
        hour(13),
    )
    .await?;

    service(&stage).delete(&stage.actor, team.id).await.unwrap();

    assert!(entity::prelude::Team::find_by_id(team.id)
        .one(&stage.test.db)
        .await?
        .is_none());

    let reservations = entity::prelude::Reservation::find()
        .all(&stage.test.db)
        .await?;
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, surviving.id);

    let memberships = entity::prelude::TeamUser::find()
        .all(&stage.test.db)
        .await?;
    assert!(memberships.iter().all(|m| m.team_id != team.id));

    Ok(())
}

/// Creating a team enrolls the creator, so base-grant holders can manage
/// what they created.
#[tokio::test]
async fn creator_joins_created_team() -> Result<(), TestError> {
    let stage = stage().await?;
    let team_service = service(&stage);

    let team = team_service
        .create(&stage.actor, "blue", Some("other_team"))
        .await
        .unwrap();

    let dto = team_service.read(&stage.actor, team.id).await.unwrap();

    let members = dto.members.expect("creator should see the member list");
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, stage.actor.user.id);

    Ok(())
}
