//! Reasoning Leaderboard Domain Types
//!
//! This crate provides the core domain model for the reasoning leaderboard:
//! the closed set of datasets, the tagged union of answer values, the
//! persisted submission record, and the typed errors the boundary layers
//! surface to callers.
//!
//! ## Modules
//!
//! - **dataset**: enumerated dataset kinds with typed parse errors
//! - **answer**: the `AnswerValue` tagged union for submitted/expected answers
//! - **submission**: the immutable persisted `Submission` record
//! - **errors**: validation error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod answer;
pub mod dataset;
pub mod errors;
pub mod submission;

// Re-export commonly used types
pub use answer::AnswerValue;
pub use dataset::{DatasetKind, UnsupportedDatasetError};
pub use errors::ValidationError;
pub use submission::{Submission, DEFAULT_CATEGORY};
