//! Bootstrap errors for the storage layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
