use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, DbErr,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// In-memory SQLite database plus an optional session for one test.
///
/// Both are opened on first use. The session store lives in the same database, so a test
/// logging a user in with `session.insert("auth:user", id)` sees the same rows the
/// services under test read.
pub struct TestContext {
    /// Connection to the test database, `None` until first used.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the test database, `None` until `session()` is called.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, opening `sqlite::memory:` on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection owned by this context
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(DbErr::Custom("database not opened".to_string())))
    }

    /// Creates the schema: tables first, then indexes, then raw constraint SQL.
    ///
    /// Called by `TestBuilder::build()`. Tables must be listed after the tables
    /// their foreign keys point at.
    pub async fn apply_schema(
        &mut self,
        tables: Vec<TableCreateStatement>,
        indexes: Vec<IndexCreateStatement>,
        statements: Vec<&'static str>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for table in tables {
            db.execute(&table).await?;
        }

        for index in indexes {
            db.execute(&index).await?;
        }

        for sql in statements {
            db.execute_unprepared(sql).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table and session on first call.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().with_membership_tables().build().await?;
    /// let session = test.session().await?;
    /// session.insert("auth:user", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);

            store
                .migrate()
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Database(DbErr::Custom("session not created".to_string())))
    }

    /// Both handles at once, for guard tests that need the database and the session.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Database(DbErr::Custom(
                "test context failed to initialize".to_string(),
            ))),
        }
    }
}
