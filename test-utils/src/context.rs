use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// A private in-memory SQLite database for one test.
///
/// Each context opens its own `sqlite::memory:` connection, so tests never see each
/// other's rows. The connection lives as long as the context.
pub struct TestContext {
    db: DatabaseConnection,
}

impl TestContext {
    /// Opens a fresh in-memory database with no tables.
    pub async fn connect() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    /// Runs the given CREATE TABLE statements in order.
    pub async fn create_tables(&self, stmts: &[TableCreateStatement]) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(stmt).await?;
        }

        Ok(())
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Clones the connection handle for code that takes ownership, such as app state.
    pub fn connection(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
