//! In-memory submission repository for development and tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::cmp::Ordering;

use reasoning_board_application::{ApplicationError, SubmissionFilter, SubmissionRepositoryPort};
use reasoning_board_domain::Submission;

/// Keeps submissions in process memory.
///
/// The default backend when no `DATABASE_URL` is configured; contents are
/// lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    submissions: RwLock<Vec<Submission>>,
}

impl InMemorySubmissionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored submissions.
    pub fn len(&self) -> usize {
        self.submissions.read().len()
    }

    /// Whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.submissions.read().is_empty()
    }
}

#[async_trait]
impl SubmissionRepositoryPort for InMemorySubmissionRepository {
    async fn insert(&self, submission: &Submission) -> Result<(), ApplicationError> {
        self.submissions.write().push(submission.clone());
        Ok(())
    }

    async fn find(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, ApplicationError> {
        let mut matching: Vec<Submission> = self
            .submissions
            .read()
            .iter()
            .filter(|submission| filter.matches(submission))
            .cloned()
            .collect();

        // Stable sort keeps insertion order for equal accuracies.
        matching.sort_by(|a, b| {
            b.accuracy
                .partial_cmp(&a.accuracy)
                .unwrap_or(Ordering::Equal)
        });

        Ok(matching)
    }
}
