use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Input validation failures, raised before any state is touched.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("one or more required parameter is missing: {0}")]
    MissingParameter(&'static str),
    #[error("cannot parse start or end date")]
    UnparsableTime,
    #[error("start time must be before end time")]
    StartNotBeforeEnd,
    #[error("invalid team type")]
    UnknownTeamType,
    /// An id referenced in a request body does not exist.
    #[error("invalid {0} id")]
    InvalidReference(&'static str),
    /// The resource addressed by the request path does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
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
