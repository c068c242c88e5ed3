use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating the schema failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Reading or writing the test session failed.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
