//! Leaderboard query endpoint.

use crate::{
    error::{ApiResult, ErrorBody},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use reasoning_board_application::{ApplicationError, SubmissionFilter};
use reasoning_board_domain::{AnswerValue, DatasetKind, Submission};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Optional leaderboard filters. Empty values mean "no constraint".
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// Restrict to one category
    pub category: Option<String>,
    /// Restrict to one dataset
    pub dataset: Option<String>,
}

/// One leaderboard row: the stored submission without any internal id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRow {
    /// Identifier of the submitting model
    pub model_name: String,
    /// Dataset the outputs were produced against
    #[schema(value_type = String)]
    pub dataset: DatasetKind,
    /// Per-question submitted answers
    #[schema(value_type = Object)]
    pub outputs: BTreeMap<String, AnswerValue>,
    /// Server-computed accuracy
    pub accuracy: f64,
    /// Server-assigned submission time
    pub timestamp: DateTime<Utc>,
    /// Leaderboard category
    pub category: String,
}

impl From<Submission> for LeaderboardRow {
    fn from(submission: Submission) -> Self {
        Self {
            model_name: submission.model_name,
            dataset: submission.dataset,
            outputs: submission.outputs,
            accuracy: submission.accuracy,
            timestamp: submission.timestamp,
            category: submission.category,
        }
    }
}

/// Leaderboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

/// Get the leaderboard.
///
/// Returns submissions matching the optional filters, sorted by accuracy
/// descending. An empty store yields an empty array.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = "leaderboards",
    params(
        ("category" = Option<String>, Query, description = "Exact-match category filter"),
        ("dataset" = Option<String>, Query, description = "Exact-match dataset filter"),
    ),
    responses(
        (status = 200, description = "Ranked submissions", body = [LeaderboardRow]),
        (status = 400, description = "Unsupported dataset filter", body = ErrorBody),
    )
)]
async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<LeaderboardRow>>> {
    let dataset = match query.dataset.as_deref() {
        None | Some("") => None,
        Some(name) => Some(
            name.parse::<DatasetKind>()
                .map_err(ApplicationError::from)?,
        ),
    };
    let category = query.category.filter(|category| !category.is_empty());

    let filter = SubmissionFilter { category, dataset };
    let submissions = state.leaderboard_service.list(filter).await?;

    Ok(Json(
        submissions.into_iter().map(LeaderboardRow::from).collect(),
    ))
}
