//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Whether `POST /v1/users/seed` is served. Disabled in production.
    pub allow_seeding: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, allow_seeding: bool) -> Self {
        Self { db, allow_seeding }
    }
}
