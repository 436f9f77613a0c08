//! Test context structure and utilities.
//!
//! The `TestContext` is returned by `TestBuilder::build()` and gives tests access to the
//! in-memory database and session.

use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_PASSWORD_HASH_COST, error::TestError};

/// Test environment created by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let test = TestBuilder::new().with_booking_tables().build().await?;
///
/// let journey = test.booking().insert_booked_journey(2, 10).await?;
/// let user = test.user().insert_user("rider@example.com").await?;
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it and a
    /// password hash cost.
    ///
    /// This allows conversion to `AppState` without the test-utils crate depending on the
    /// railway crate.
    ///
    /// ```ignore
    /// let state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, u32)>,
    {
        T::from((self.db.clone(), TEST_PASSWORD_HASH_COST))
    }

    /// Create a new test context with an empty database and session.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db, session })
    }

    /// Execute CREATE TABLE then CREATE INDEX statements.
    pub(crate) async fn with_schema(
        &self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in tables {
            self.db.execute(&stmt).await?;
        }

        for stmt in indexes {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
