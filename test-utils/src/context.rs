use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Session inactivity expiry used in tests, matching the server's.
const SESSION_EXPIRY_DAYS: i64 = 7;

/// Isolated test environment over an in-memory SQLite database.
///
/// Each context owns its own database, so tests never see each other's rows.
/// The connection and the session are created on first use and live as long
/// as the context does.
pub struct TestContext {
    /// Lazily created in-memory database connection.
    pub db: Option<DatabaseConnection>,

    /// Lazily created session backed by the same database.
    ///
    /// Lets auth-guard tests drive the exact session type the server sees
    /// without standing up an HTTP stack.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Live in-memory connection
    /// - `Err(TestError::Database)` - SQLite connection failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        Ok(self.db.as_ref().unwrap())
    }

    /// Executes the given CREATE TABLE statements against the test database.
    ///
    /// Called by `TestBuilder::build()`; statements run in the order given,
    /// so parents must precede tables that reference them.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements derived from entity schemas
    ///
    /// # Returns
    /// - `Ok(())` - Schema created
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating store and session on first call.
    ///
    /// The store reuses the context's SQLite pool and migrates its table the
    /// first time, mirroring the server's startup wiring.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session bound to the in-memory store
    /// - `Err(TestError::Database)` - Store migration failed
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();

            let store = SqliteStore::new(pool);
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_EXPIRY_DAYS))),
            ));
        }

        Ok(self.session.as_ref().unwrap())
    }

    /// Returns database and session together.
    ///
    /// Convenience for guard tests that need both; sidesteps the borrow
    /// gymnastics of calling `database()` and `session()` back to back.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
