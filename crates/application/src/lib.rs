//! Application layer for the reasoning leaderboard.
//!
//! This crate orchestrates the scoring core and coordinates between the
//! domain model and the persistence collaborator.
//!
//! ## Modules
//!
//! - `scoring` - answer key lookup, comparator policies, and the evaluator
//! - `services` - submission, leaderboard, and export services
//! - `validation` - inbound request validation

pub mod scoring;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use scoring::{AnswerKey, Evaluator, StaticAnswerKey, NUMERIC_TOLERANCE};
pub use services::{
    ExportService, LeaderboardService, SubmissionFilter, SubmissionRepositoryPort,
    SubmissionService, SubmitReceipt,
};
pub use validation::SubmitRequest;

use reasoning_board_domain::{UnsupportedDatasetError, ValidationError};
use thiserror::Error;

/// Application-level errors.
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Required submission fields absent or empty
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unrecognized dataset name rejected at the boundary
    #[error(transparent)]
    UnsupportedDataset(#[from] UnsupportedDatasetError),

    /// Failure reading from or writing to the submission store
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::Validation(_) => 400,
            ApplicationError::UnsupportedDataset(_) => 400,
            ApplicationError::Persistence(_) => 500,
            ApplicationError::Internal(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::Validation(_) => "VALIDATION_ERROR",
            ApplicationError::UnsupportedDataset(_) => "UNSUPPORTED_DATASET",
            ApplicationError::Persistence(_) => "PERSISTENCE_ERROR",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Application-wide result type.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
