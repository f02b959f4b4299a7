//! Submission intake endpoint.

use crate::{
    error::{ApiResult, ErrorBody},
    state::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use reasoning_board_application::SubmitRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a successful submission.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    /// Confirmation message
    pub message: String,
    /// Server-computed accuracy in `[0.0, 1.0]`
    pub accuracy: f64,
}

/// Submission routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit))
}

/// Score and store one submission.
///
/// The accuracy in the response is always recomputed server-side; any
/// accuracy supplied by the caller is ignored.
#[utoipa::path(
    post,
    path = "/api/submit",
    tag = "submissions",
    responses(
        (status = 200, description = "Submission scored and stored", body = SubmitResponse),
        (status = 400, description = "Missing required fields or unsupported dataset", body = ErrorBody),
    )
)]
async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<Json<SubmitResponse>> {
    let receipt = state.submission_service.submit(request).await?;

    Ok(Json(SubmitResponse {
        message: "Submission successful".to_string(),
        accuracy: receipt.accuracy,
    }))
}
