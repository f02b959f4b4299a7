//! Public API routes, nested under `/api`.

use crate::state::AppState;
use axum::Router;

pub mod export;
pub mod leaderboard;
pub mod submissions;

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(submissions::routes())
        .merge(leaderboard::routes())
        .merge(export::routes())
}
