//! Application services.
//!
//! Thin orchestration over the scoring core and the persistence
//! collaborator: submission intake, leaderboard queries, and CSV export.

mod export;
mod leaderboard;
mod submission;

pub use export::ExportService;
pub use leaderboard::LeaderboardService;
pub use submission::{SubmissionService, SubmitReceipt};

use crate::ApplicationError;
use async_trait::async_trait;
use reasoning_board_domain::{DatasetKind, Submission};

/// Exact-match filter over the optional leaderboard dimensions.
///
/// Absent fields mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionFilter {
    /// Restrict to one category.
    pub category: Option<String>,
    /// Restrict to one dataset.
    pub dataset: Option<DatasetKind>,
}

impl SubmissionFilter {
    /// Whether a submission satisfies the filter.
    pub fn matches(&self, submission: &Submission) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| submission.category == category)
            && self
                .dataset
                .map_or(true, |dataset| submission.dataset == dataset)
    }
}

/// Persistence port for scored submissions.
///
/// The store only needs insert-one and find-with-filter-and-sort; any
/// document or relational backend satisfying this contract works.
#[async_trait]
pub trait SubmissionRepositoryPort: Send + Sync {
    /// Insert one scored submission.
    async fn insert(&self, submission: &Submission) -> Result<(), ApplicationError>;

    /// Find submissions matching the filter, sorted by accuracy descending
    /// with stable ties.
    async fn find(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, ApplicationError>;
}
