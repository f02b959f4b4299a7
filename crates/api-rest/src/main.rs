//! Leaderboard API server binary.

use anyhow::Context;
use reasoning_board_api_rest::app::{create_app, init_tracing};
use reasoning_board_api_rest::config::ApiConfig;
use reasoning_board_api_rest::state::AppState;
use reasoning_board_infrastructure::{DatabaseConfig, DatabasePool, PgSubmissionRepository};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    init_tracing(&config)?;

    let state = if std::env::var("DATABASE_URL").is_ok() {
        let db_config = DatabaseConfig::from_env()?;
        let pool = DatabasePool::connect(&db_config).await?;
        pool.ensure_schema().await?;
        info!("using PostgreSQL submission store");

        AppState::with_repository(
            config.clone(),
            Arc::new(PgSubmissionRepository::new(pool.pool().clone())),
        )
    } else {
        warn!("DATABASE_URL not set; using in-memory submission store");
        AppState::new(config.clone())
    };

    let app = create_app(state);
    let address = config.server_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!(%address, "leaderboard API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
