//! Application state and dependency injection.
//!
//! The shared state carries the three services, all wired over one
//! repository implementation of the submission port.

use crate::config::ApiConfig;
use reasoning_board_application::{
    Evaluator, ExportService, LeaderboardService, StaticAnswerKey, SubmissionRepositoryPort,
    SubmissionService,
};
use reasoning_board_infrastructure::InMemorySubmissionRepository;
use std::sync::Arc;

/// Application state shared across all requests.
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Submission intake service
    pub submission_service: Arc<SubmissionService>,

    /// Leaderboard query service
    pub leaderboard_service: Arc<LeaderboardService>,

    /// CSV export service
    pub export_service: Arc<ExportService>,
}

impl AppState {
    /// Create state over the in-memory store.
    ///
    /// Suitable for development and testing; production deployments wire a
    /// database-backed repository via [`AppState::with_repository`].
    pub fn new(config: ApiConfig) -> Self {
        Self::with_repository(config, Arc::new(InMemorySubmissionRepository::new()))
    }

    /// Create state over a custom repository implementation.
    pub fn with_repository(
        config: ApiConfig,
        repository: Arc<dyn SubmissionRepositoryPort>,
    ) -> Self {
        let evaluator = Evaluator::new(Arc::new(StaticAnswerKey::builtin()));

        Self {
            config: Arc::new(config),
            submission_service: Arc::new(SubmissionService::new(
                Arc::clone(&repository),
                evaluator,
            )),
            leaderboard_service: Arc::new(LeaderboardService::new(Arc::clone(&repository))),
            export_service: Arc::new(ExportService::new(repository)),
        }
    }
}
