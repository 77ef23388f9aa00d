use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or execute setup SQL.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
