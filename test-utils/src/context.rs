use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Sessions created for tests expire after a day of inactivity, matching the server default.
const SESSION_EXPIRY_MINUTES: i64 = 1440;

/// In-memory environment for a single test.
///
/// Holds an SQLite `sqlite::memory:` connection and, when a test needs one, a
/// `tower_sessions::Session` stored in the same database. Both are created on first use
/// and dropped together with the context, so every test starts from an empty schema.
pub struct TestContext {
    /// Connection to the in-memory database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the in-memory database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a context with neither a connection nor a session.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the in-memory connection, opening it on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Open connection
    /// - `Err(TestError::Database)` - SQLite could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("database not initialized".to_string()).into())
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; statements for referenced tables must come
    /// before the tables holding foreign keys to them.
    ///
    /// # Returns
    /// - `Ok(())` - Every table was created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table and a fresh session on first call.
    ///
    /// The session store shares the connection pool of `database()`, so guards under
    /// test see the same users the test inserted.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session with no data yet
    /// - `Err(TestError::Database)` - The session table could not be created
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().with_table(User).build().await?;
    /// let session = test.session().await?;
    /// session.insert("auth:user", user.id).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.database().await?.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::minutes(SESSION_EXPIRY_MINUTES))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| sea_orm::DbErr::Custom("session not initialized".to_string()).into())
    }

    /// Returns the connection and the session together.
    ///
    /// Avoids holding two mutable borrows of the context when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
