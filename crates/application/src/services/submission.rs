//! Submission intake: validate, score, persist.

use super::SubmissionRepositoryPort;
use crate::scoring::Evaluator;
use crate::validation::SubmitRequest;
use crate::ApplicationResult;
use chrono::Utc;
use reasoning_board_domain::{DatasetKind, Submission, DEFAULT_CATEGORY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// The server-computed accuracy for the submitted outputs.
    pub accuracy: f64,
}

/// Orchestrates one submission: request validation, evaluation, and a
/// single insert into the store.
///
/// There is no retry or rollback logic; a persistence failure propagates
/// to the caller and nothing is stored.
pub struct SubmissionService {
    repository: Arc<dyn SubmissionRepositoryPort>,
    evaluator: Evaluator,
}

impl SubmissionService {
    /// Create a submission service over a repository and evaluator.
    pub fn new(repository: Arc<dyn SubmissionRepositoryPort>, evaluator: Evaluator) -> Self {
        Self {
            repository,
            evaluator,
        }
    }

    /// Score and persist one submission.
    ///
    /// Fails with the fixed-message validation error when required fields
    /// are absent or empty, and with a typed unsupported-dataset error
    /// before any evaluation when the dataset string is unknown. The
    /// accuracy in the receipt is always recomputed server-side.
    #[instrument(skip(self, request), fields(model_name = %request.model_name, dataset = %request.dataset))]
    pub async fn submit(&self, request: SubmitRequest) -> ApplicationResult<SubmitReceipt> {
        request.validate()?;

        let dataset: DatasetKind = request.dataset.parse()?;
        let accuracy = self.evaluator.evaluate(&request.outputs, dataset);

        let submission = Submission {
            model_name: request.model_name,
            dataset,
            outputs: request.outputs,
            accuracy,
            timestamp: Utc::now(),
            category: request
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        };

        self.repository.insert(&submission).await?;

        info!(accuracy, "submission scored and stored");
        Ok(SubmitReceipt { accuracy })
    }
}

impl std::fmt::Debug for SubmissionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionService").finish_non_exhaustive()
    }
}
