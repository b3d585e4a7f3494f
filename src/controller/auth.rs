use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    error::{validation::ValidationError, Error},
    model::{
        api::{AuthRequest, TokenDto},
        app::AppState,
    },
    service::auth::AuthService,
};

/// Authenticate by username, registering the user on first contact.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<impl IntoResponse, Error> {
    let username = request
        .username
        .ok_or(ValidationError::MissingParameter("username"))?;

    let auth_service = AuthService::new(state.db.clone(), state.token_secret.clone());
    let token = auth_service.authenticate(&username).await?;

    Ok(Json(TokenDto { token }))
}
