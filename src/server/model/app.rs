//! Shared application state.

use sea_orm::DatabaseConnection;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool
    pub db: DatabaseConnection,
    /// Bcrypt cost used when hashing new passwords
    pub password_hash_cost: u32,
}

/// Builds the state from a connection and a hash cost, used by the test harness.
impl From<(DatabaseConnection, u32)> for AppState {
    fn from((db, password_hash_cost): (DatabaseConnection, u32)) -> Self {
        Self {
            db,
            password_hash_cost,
        }
    }
}
