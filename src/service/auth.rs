//! Token issuance and username-based authentication.
//!
//! Tokens are stateless HS256 JWTs carrying the user id and an expiry;
//! nothing is stored server-side, so verification is a pure signature and
//! expiry check. A first authentication registers the user and their
//! personal `single` team in one transaction.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::{
    data::{team::TeamRepository, user::UserRepository},
    error::Error,
    model::db::UserModel,
};

const TOKEN_TTL_HOURS: i64 = 24;

const ROLE_STUDENT: &str = "student";
const TEAM_TYPE_SINGLE: &str = "single";

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32,
    exp: i64,
}

/// Issues a token for the user, valid for 24 hours.
pub fn issue_token(secret: &str, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::hours(TOKEN_TTL_HOURS);

    issue_token_with_expiry(secret, user_id, expires_at.timestamp())
}

/// Issues a token with an explicit expiry timestamp (seconds since epoch).
pub fn issue_token_with_expiry(
    secret: &str,
    user_id: i32,
    expires_at: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user_id,
        exp: expires_at,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verifies a token and returns the embedded user id.
///
/// Every failure mode (malformed token, bad signature, expired) degrades to
/// `None` so callers cannot distinguish a forged token from a stale one.
pub fn verify_token(secret: &str, token: &str) -> Option<i32> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims.sub)
}

pub struct AuthService {
    db: DatabaseConnection,
    token_secret: String,
}

impl AuthService {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: DatabaseConnection, token_secret: String) -> Self {
        Self { db, token_secret }
    }

    /// Authenticates by username, registering the user on first contact,
    /// and returns a fresh token.
    pub async fn authenticate(&self, username: &str) -> Result<String, Error> {
        let user_repository = UserRepository::new(&self.db);

        let user = match user_repository.find_by_name(username).await? {
            Some(user) => user,
            None => self.register(username).await?,
        };

        Ok(issue_token(&self.token_secret, user.id)?)
    }

    /// Creates the user with the default role and their personal `single`
    /// team, atomically. A concurrent registration of the same name loses
    /// on the unique constraint and surfaces as a 409.
    async fn register(&self, username: &str) -> Result<UserModel, Error> {
        let name = username.to_string();

        let user = self
            .db
            .transaction::<_, UserModel, Error>(|txn| {
                Box::pin(async move {
                    let user_repository = UserRepository::new(txn);
                    let team_repository = TeamRepository::new(txn);

                    let role = user_repository
                        .find_role_by_name(ROLE_STUDENT)
                        .await?
                        .ok_or_else(|| {
                            sea_orm::DbErr::RecordNotFound(format!(
                                "seeded role {} is missing",
                                ROLE_STUDENT
                            ))
                        })?;
                    let single_type = team_repository
                        .find_type_by_name(TEAM_TYPE_SINGLE)
                        .await?
                        .ok_or_else(|| {
                            sea_orm::DbErr::RecordNotFound(format!(
                                "seeded team type {} is missing",
                                TEAM_TYPE_SINGLE
                            ))
                        })?;

                    let email = format!("{}@example.com", name);
                    let user = user_repository
                        .create(&name, &email, role.id)
                        .await
                        .map_err(|err| Error::uniqueness(err, "username"))?;

                    let team = team_repository
                        .create(&name, single_type.id)
                        .await
                        .map_err(|err| Error::uniqueness(err, "team name"))?;
                    team_repository.add_member(team.id, user.id).await?;

                    Ok(user)
                })
            })
            .await?;

        tracing::info!(user_id = user.id, "registered new user");

        Ok(user)
    }
}
