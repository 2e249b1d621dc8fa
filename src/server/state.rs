//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through
//! Axum's state extraction. It carries the only shared resource of the service: the
//! database connection.

use sea_orm::DatabaseConnection;

use crate::server::error::AppError;

/// Application state containing the shared database handle.
///
/// `DatabaseConnection` is a connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, or `None` when connecting failed at startup.
    ///
    /// The listener starts even without a database; store-backed requests then fail
    /// with `AppError::StoreUnavailable`.
    pub db: Option<DatabaseConnection>,
}

impl AppState {
    /// Creates a new application state around the startup connection result.
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Returns the database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection established at startup
    /// - `Err(AppError::StoreUnavailable)` - Startup connection failed
    pub fn db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db.as_ref().ok_or(AppError::StoreUnavailable)
    }
}
