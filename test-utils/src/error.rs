use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] DbErr),

    /// Reading or writing the test session failed.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
