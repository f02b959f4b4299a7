//! Leaderboard queries.

use super::{SubmissionFilter, SubmissionRepositoryPort};
use crate::ApplicationResult;
use reasoning_board_domain::Submission;
use std::sync::Arc;
use tracing::instrument;

/// Read-only ranked view over stored submissions.
///
/// Queries bypass the evaluator entirely and read persisted records
/// directly.
pub struct LeaderboardService {
    repository: Arc<dyn SubmissionRepositoryPort>,
}

impl LeaderboardService {
    /// Create a leaderboard service over a repository.
    pub fn new(repository: Arc<dyn SubmissionRepositoryPort>) -> Self {
        Self { repository }
    }

    /// List submissions matching the filter, accuracy descending.
    ///
    /// An empty result is an empty list, not an error.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: SubmissionFilter) -> ApplicationResult<Vec<Submission>> {
        self.repository.find(&filter).await
    }
}

impl std::fmt::Debug for LeaderboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardService").finish_non_exhaustive()
    }
}
