//! CSV export endpoint.

use crate::{error::ApiResult, state::AppState};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

/// Export routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/export", get(export))
}

/// Download the full submission collection as CSV.
///
/// Zero submissions produce a header-only document, not an error.
#[utoipa::path(
    get,
    path = "/api/export",
    tag = "export",
    responses(
        (status = 200, description = "CSV dump of all submissions, one row per submission"),
    )
)]
async fn export(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let csv = state.export_service.export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=leaderboard.csv",
            ),
        ],
        csv,
    ))
}
