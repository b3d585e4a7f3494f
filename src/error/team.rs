use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Team rule violations.
///
/// `single`-typed teams are fixed at creation: exactly one member, no
/// membership changes, no deletion. Multi-member teams cannot be emptied
/// through the membership endpoints; team deletion must be used instead.
#[derive(Error, Debug)]
pub enum TeamError {
    #[error("unable to delete team of type \"single\"")]
    SingleTeamUndeletable,
    #[error("cannot change the membership of a \"single\" team")]
    SingleTeamMembershipFixed,
    #[error("user already in team")]
    AlreadyMember,
    #[error("only one member on team, use team delete instead")]
    LastMember,
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::SingleTeamUndeletable => StatusCode::FORBIDDEN,
            Self::SingleTeamMembershipFixed => StatusCode::BAD_REQUEST,
            Self::AlreadyMember => StatusCode::CONFLICT,
            Self::LastMember => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
