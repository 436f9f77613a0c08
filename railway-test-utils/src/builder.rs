//! Declarative test builder.
//!
//! Tests chain configuration calls on [`TestBuilder`] and finish with `build()`, which creates
//! the queued tables and fixtures in one go.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_booking_tables: bool,

    users: Vec<String>,
}

impl TestBuilder {
    /// Create a builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_booking_tables: false,
            users: Vec::new(),
        }
    }

    /// Add every table of the booking schema.
    ///
    /// Creates station, route, train type, train, crew, journey, journey crew, user, order and
    /// ticket tables, plus the unique `(cargo, seat, journey_id)` ticket index.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_booking_tables(mut self) -> Self {
        self.include_booking_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use railway_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), railway_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Station)
    ///     .with_table(Route)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with [`TEST_PASSWORD`](crate::constant::TEST_PASSWORD) during `build()`.
    ///
    /// Requires the user table, see [`TestBuilder::with_booking_tables`].
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Creates database tables and indexes
    /// 2. Inserts user fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        // 1. Create tables
        let mut tables = Vec::new();
        let mut indexes = Vec::new();

        if self.include_booking_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Station),
                schema.create_table_from_entity(entity::prelude::Route),
                schema.create_table_from_entity(entity::prelude::TrainType),
                schema.create_table_from_entity(entity::prelude::Train),
                schema.create_table_from_entity(entity::prelude::Crew),
                schema.create_table_from_entity(entity::prelude::Journey),
                schema.create_table_from_entity(entity::prelude::JourneyCrew),
                schema.create_table_from_entity(entity::prelude::RailwayUser),
                schema.create_table_from_entity(entity::prelude::Order),
                schema.create_table_from_entity(entity::prelude::Ticket),
            ]);
            indexes.push(entity::ticket::seat_unique_index());
        }

        tables.extend(self.tables);
        test.with_schema(tables, indexes).await?;

        // 2. Insert fixtures
        for email in self.users {
            test.user().insert_user(&email).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
