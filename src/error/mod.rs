//! Error types for the teamroom server.
//!
//! A top-level [`Error`] aggregates per-domain error enums, each of which
//! implements `IntoResponse` so handlers can return `Result<_, Error>`
//! directly. Scheduling conflicts are deliberately *not* errors: they are
//! structured decisions (see [`crate::service::reservation::ScheduleOutcome`])
//! carrying enough information for the caller to retry with an explicit
//! override.

pub mod access;
pub mod auth;
pub mod config;
pub mod team;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        access::AccessError, auth::AuthError, config::ConfigError, team::TeamError,
        validation::ValidationError,
    },
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Authentication error (missing, malformed, or expired bearer token).
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// Authorization error (principal lacks the required capability).
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Input validation error, surfaced before any state is touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Team rule violation (single-team protection, membership rules).
    #[error(transparent)]
    Team(#[from] TeamError),
    /// A unique value (team name, room number) is already taken.
    #[error("{0} is already in use")]
    Uniqueness(&'static str),
    /// Token encoding error.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Map a unique-constraint violation onto [`Error::Uniqueness`] so the
    /// caller sees a 409 for duplicate names instead of a leaked database
    /// error.
    pub(crate) fn uniqueness(err: sea_orm::DbErr, resource: &'static str) -> Error {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Error::Uniqueness(resource),
            _ => Error::DbErr(err),
        }
    }
}

impl From<sea_orm::TransactionError<Error>> for Error {
    fn from(err: sea_orm::TransactionError<Error>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(e) => Error::DbErr(e),
            sea_orm::TransactionError::Transaction(e) => e,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Config(e) => e.into_response(),
            Self::Auth(e) => e.into_response(),
            Self::Access(e) => e.into_response(),
            Self::Validation(e) => e.into_response(),
            Self::Team(e) => e.into_response(),
            Self::Uniqueness(resource) => {
                tracing::debug!(resource = %resource, "uniqueness conflict");

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: format!("{} is already in use", resource),
                    }),
                )
                    .into_response()
            }
            Self::Token(e) => InternalServerError(e).into_response(),
            Self::DbErr(e) => InternalServerError(e).into_response(),
        }
    }
}

/// Wrapper for errors that should not leak detail to the client.
///
/// Logs the underlying error and responds with an opaque 500 body.
pub struct InternalServerError<E: std::fmt::Debug>(pub E);

impl<E: std::fmt::Debug> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Internal server error: {:?}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
