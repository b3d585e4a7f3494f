use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, service::access::Capability};

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("insufficient permissions: {0} required")]
    CapabilityRequired(Capability),
    #[error("team creation is not permitted")]
    TeamCreationDenied,
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::FORBIDDEN,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
