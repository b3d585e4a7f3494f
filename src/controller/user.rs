use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{validation::ValidationError, Error},
    model::{app::AppState, auth::AuthenticatedUser},
    service::user::UserService,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Get a user's profile with team summaries and permission names
pub async fn get_user(
    State(state): State<AppState>,
    actor: AuthenticatedUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(state.db.clone());
    let detail = user_service.detail(&actor, user_id).await?;

    Ok(Json(detail))
}

/// Search users by name prefix
pub async fn search_users(
    State(state): State<AppState>,
    _actor: AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let prefix = query
        .search
        .ok_or(ValidationError::MissingParameter("search"))?;

    let user_service = UserService::new(state.db.clone());
    let results = user_service.search(&prefix).await?;

    Ok(Json(results))
}
