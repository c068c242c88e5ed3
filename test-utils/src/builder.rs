use entity::prelude::*;
use migration::constraint;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables and the constraints that go with them, then call `build()`
/// to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Club};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Club)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,

    /// Raw SQL for constraints the query builder cannot express (partial indexes).
    statements: Vec<&'static str>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference) because SQLite enforces foreign keys.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created after all tables.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds a raw SQL statement executed after all indexes.
    pub fn with_sql(mut self, sql: &'static str) -> Self {
        self.statements.push(sql);
        self
    }

    /// Adds the tables and constraints required for membership operations.
    ///
    /// Tables, in dependency order:
    /// - User
    /// - Club
    /// - ClubMembership (unique per club/user, one approved president per club and per user)
    /// - Notification
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_membership_tables(self) -> Self {
        self.with_table(User)
            .with_table(Club)
            .with_table(ClubMembership)
            .with_table(Notification)
            .with_index(constraint::club_membership_unique())
            .with_sql(constraint::ONE_PRESIDENT_PER_CLUB)
            .with_sql(constraint::ONE_PRESIDENCY_PER_USER)
    }

    /// Adds the facility catalog tables.
    ///
    /// Tables: Location, LocationValidDay, LocationDisabledDate, DailySlot, TimeSlot and
    /// DisabledSlot (unique per slot/date).
    pub fn with_location_tables(self) -> Self {
        self.with_table(Location)
            .with_table(LocationValidDay)
            .with_table(LocationDisabledDate)
            .with_table(DailySlot)
            .with_table(TimeSlot)
            .with_table(DisabledSlot)
            .with_index(constraint::disabled_slot_unique())
    }

    /// Adds everything `with_membership_tables()` adds plus Event and EventParticipant.
    pub fn with_event_tables(self) -> Self {
        self.with_membership_tables()
            .with_table(Event)
            .with_table(EventParticipant)
    }

    /// Adds the full schema needed by reservation and event review tests.
    ///
    /// Equivalent to `with_event_tables()` followed by `with_location_tables()`, the
    /// EventReservation table with its (location, slot, date) unique index and the
    /// Setting table.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_reservation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_reservation_tables(self) -> Self {
        self.with_event_tables()
            .with_location_tables()
            .with_table(EventReservation)
            .with_table(Setting)
            .with_index(constraint::event_reservation_unique())
    }

    /// Builds and initializes the test context with configured schema.
    ///
    /// Creates an in-memory SQLite database connection, then executes the CREATE TABLE
    /// statements, the index statements and the raw statements in that order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup
            .apply_schema(self.tables, self.indexes, self.statements)
            .await?;

        Ok(setup)
    }
}
