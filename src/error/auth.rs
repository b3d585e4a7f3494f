use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is missing or not a bearer token")]
    MissingToken,
    #[error("Bearer token failed verification or has expired")]
    InvalidToken,
    #[error("User ID {0:?} from a verified token not found in database")]
    UserNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        // All authentication failures degrade to the same response so the
        // client cannot distinguish a forged token from a deleted user.
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "missing or invalid authorization token".to_string(),
            }),
        )
            .into_response()
    }
}
