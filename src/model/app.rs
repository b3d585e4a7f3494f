use sea_orm::DatabaseConnection;

use crate::model::lock::KeyedLocks;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub token_secret: String,
    /// Serializes reservation classification + commit per room.
    pub room_locks: KeyedLocks,
    /// Serializes membership mutation per team.
    pub team_locks: KeyedLocks,
}

impl AppState {
    pub fn new(db: DatabaseConnection, token_secret: String) -> Self {
        Self {
            db,
            token_secret,
            room_locks: KeyedLocks::new(),
            team_locks: KeyedLocks::new(),
        }
    }
}
