//! Tests for stateless token issuance and first-login registration.

use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use teamroom::service::auth::{
    issue_token, issue_token_with_expiry, verify_token, AuthService,
};
use teamroom_test_utils::prelude::*;

const SECRET: &str = "test-secret";

#[test]
fn token_round_trip() {
    let token = issue_token(SECRET, 42).unwrap();

    assert_eq!(verify_token(SECRET, &token), Some(42));
}

#[test]
fn malformed_token_is_rejected() {
    assert_eq!(verify_token(SECRET, "not-a-token"), None);
    assert_eq!(verify_token(SECRET, ""), None);
}

#[test]
fn wrong_secret_is_rejected() {
    let token = issue_token(SECRET, 42).unwrap();

    assert_eq!(verify_token("other-secret", &token), None);
}

#[test]
fn expired_token_is_rejected() {
    // Well past the default validation leeway.
    let expired_at = (Utc::now() - Duration::hours(1)).timestamp();
    let token = issue_token_with_expiry(SECRET, 42, expired_at).unwrap();

    assert_eq!(verify_token(SECRET, &token), None);
}

/// First authentication registers the user with the default role and a
/// personal team containing exactly them.
#[tokio::test]
async fn first_authentication_registers_user() -> Result<(), TestError> {
    let test = TestSetup::with_all_tables().await?;
    seed_role(&test.db, "student", &["team.read", "reservation.create"]).await?;
    seed_team_type(&test.db, "single", 0, 7).await?;
    seed_team_type(&test.db, "other_team", 1, 30).await?;

    let auth_service = AuthService::new(test.db.clone(), SECRET.to_string());

    let token = auth_service.authenticate("alice").await.unwrap();
    let user_id = verify_token(SECRET, &token).unwrap();

    let user = entity::prelude::User::find_by_id(user_id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@example.com");

    let team = entity::prelude::Team::find()
        .filter(entity::team::Column::Name.eq("alice"))
        .one(&test.db)
        .await?
        .unwrap();

    let memberships = entity::prelude::TeamUser::find()
        .filter(entity::team_user::Column::TeamId.eq(team.id))
        .all(&test.db)
        .await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].user_id, user.id);

    Ok(())
}

/// Authenticating again reuses the registered user instead of duplicating.
#[tokio::test]
async fn repeat_authentication_reuses_user() -> Result<(), TestError> {
    let test = TestSetup::with_all_tables().await?;
    seed_role(&test.db, "student", &[]).await?;
    seed_team_type(&test.db, "single", 0, 7).await?;

    let auth_service = AuthService::new(test.db.clone(), SECRET.to_string());

    let first = auth_service.authenticate("alice").await.unwrap();
    let second = auth_service.authenticate("alice").await.unwrap();

    assert_eq!(
        verify_token(SECRET, &first).unwrap(),
        verify_token(SECRET, &second).unwrap()
    );

    let users = entity::prelude::User::find().all(&test.db).await?;
    assert_eq!(users.len(), 1);

    let teams = entity::prelude::Team::find().all(&test.db).await?;
    assert_eq!(teams.len(), 1);

    Ok(())
}
