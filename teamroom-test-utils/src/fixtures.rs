//! Seed functions for database-backed tests.
//!
//! Each function inserts one row (or a small related set) and returns the
//! model, so tests can wire up exactly the graph they need.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::error::TestError;

/// A timestamp on the fixed fixture date, at the given hour.
pub fn hour(hour: u32) -> NaiveDateTime {
    day_time(1, hour)
}

/// A timestamp on the given day of the fixture month, at the given hour.
pub fn day_time(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Seeds a role holding the given capability strings. Permissions are
/// created on demand and shared between roles.
pub async fn seed_role(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    capabilities: &[&str],
) -> Result<entity::role::Model, TestError> {
    let role = entity::role::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for capability in capabilities {
        let permission = match entity::prelude::Permission::find()
            .filter(entity::permission::Column::Name.eq(*capability))
            .one(db)
            .await?
        {
            Some(permission) => permission,
            None => {
                entity::permission::ActiveModel {
                    name: ActiveValue::Set(capability.to_string()),
                    ..Default::default()
                }
                .insert(db)
                .await?
            }
        };

        entity::role_permission::ActiveModel {
            role_id: ActiveValue::Set(role.id),
            permission_id: ActiveValue::Set(permission.id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(role)
}

pub async fn seed_team_type(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    priority: i32,
    advance_time: i32,
) -> Result<entity::team_type::Model, TestError> {
    let team_type = entity::team_type::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        priority: ActiveValue::Set(priority),
        advance_time: ActiveValue::Set(advance_time),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(team_type)
}

pub async fn seed_user(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    role_id: i32,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(format!("{}@example.com", name)),
        role_id: ActiveValue::Set(role_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(user)
}

/// Seeds a team with the given members already enrolled.
pub async fn seed_team(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    team_type_id: i32,
    member_ids: &[i32],
) -> Result<entity::team::Model, TestError> {
    let team = entity::team::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        team_type_id: ActiveValue::Set(team_type_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for member_id in member_ids {
        entity::team_user::ActiveModel {
            team_id: ActiveValue::Set(team.id),
            user_id: ActiveValue::Set(*member_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(team)
}

pub async fn seed_room(
    db: &sea_orm::DatabaseConnection,
    number: &str,
) -> Result<entity::room::Model, TestError> {
    let room = entity::room::ActiveModel {
        number: ActiveValue::Set(number.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(room)
}

pub async fn seed_feature(
    db: &sea_orm::DatabaseConnection,
    name: &str,
) -> Result<entity::room_feature::Model, TestError> {
    let feature = entity::room_feature::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(feature)
}

pub async fn seed_reservation(
    db: &sea_orm::DatabaseConnection,
    room_id: i32,
    team_id: i32,
    created_by_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<entity::reservation::Model, TestError> {
    let reservation = entity::reservation::ActiveModel {
        room_id: ActiveValue::Set(room_id),
        team_id: ActiveValue::Set(team_id),
        created_by_id: ActiveValue::Set(created_by_id),
        start: ActiveValue::Set(start),
        end: ActiveValue::Set(end),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(reservation)
}
