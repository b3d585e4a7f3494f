use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel},
    service::{access::PermissionSet, auth::verify_token},
};

/// Principal resolved from the `Authorization: Bearer` header.
///
/// Verification is stateless: the token carries the user id and expiry and
/// is checked against the process-wide secret. Any failure (missing header,
/// bad signature, expiry, unknown user) rejects the request with a 401
/// before the handler body runs.
pub struct AuthenticatedUser {
    pub user: UserModel,
    pub permissions: PermissionSet,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let user_id = verify_token(&state.token_secret, token).ok_or(AuthError::InvalidToken)?;

        let user_repository = UserRepository::new(&state.db);

        let user = user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        let permissions = PermissionSet::from_names(user_repository.permission_names(&user).await?);

        Ok(AuthenticatedUser { user, permissions })
    }
}
