//! Infrastructure layer for the reasoning leaderboard.
//!
//! Implements the application's persistence port against PostgreSQL, with
//! an in-memory repository for development and tests.
//!
//! ## Modules
//!
//! - `database` - connection pool, configuration, and schema bootstrap
//! - `repositories` - submission repository implementations

pub mod database;
pub mod repositories;

// Re-export commonly used types
pub use database::{DatabaseConfig, DatabasePool};
pub use repositories::{InMemorySubmissionRepository, PgSubmissionRepository};

use reasoning_board_application::ApplicationError;
use thiserror::Error;

/// Infrastructure errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Row payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A stored row no longer satisfies a domain invariant
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

impl From<Error> for ApplicationError {
    fn from(error: Error) -> Self {
        ApplicationError::Persistence(error.to_string())
    }
}

/// Infrastructure-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
