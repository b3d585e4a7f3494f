//! Request and response DTOs for the HTTP surface.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::db::{RoomFeatureModel, RoomModel, UserModel};

#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
}

impl From<&UserModel> for UserSummaryDto {
    fn from(user: &UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDetailDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub teams: Vec<TeamDto>,
    pub permissions: Vec<String>,
}

/// Team payload with visibility-dependent fields.
///
/// `id` and `type` are always present; name, advance time, and the member
/// list are populated only when the requesting user may read the team
/// (elevated `team.read`, or the base capability plus membership).
#[derive(Debug, Serialize)]
pub struct TeamDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub team_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<UserSummaryDto>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub team_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoomDto {
    pub id: i32,
    pub number: String,
}

impl From<&RoomModel> for RoomDto {
    fn from(room: &RoomModel) -> Self {
        Self {
            id: room.id,
            number: room.number.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomDetailDto {
    pub id: i32,
    pub number: String,
    pub features: Vec<FeatureDto>,
}

#[derive(Debug, Serialize)]
pub struct FeatureDto {
    pub id: i32,
    pub name: String,
}

impl From<&RoomFeatureModel> for FeatureDto {
    fn from(feature: &RoomFeatureModel) -> Self {
        Self {
            id: feature.id,
            name: feature.name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    pub number: Option<String>,
    pub features: Option<Vec<i32>>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub team_id: Option<i32>,
    pub room_id: Option<i32>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub r#override: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReservationRequest {
    pub room_id: Option<i32>,
    pub start: Option<String>,
    pub end: Option<String>,
    #[serde(default)]
    pub r#override: bool,
}

#[derive(Debug, Serialize)]
pub struct ReservationDto {
    pub id: i32,
    pub team: TeamDto,
    pub room: RoomDto,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Body of the 409 response for a scheduling clash.
///
/// `overridable: true` invites the client to repeat the request with
/// `override: true`; `false` means the clash cannot be displaced at all.
#[derive(Debug, Serialize)]
pub struct ConflictDto {
    pub overridable: bool,
}
