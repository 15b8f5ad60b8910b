use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection, schema creation, or session store migration failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
