//! Application builder.
//!
//! Assembles routes, middleware, and state into an Axum router. Tracing
//! initialization is separate so tests can build routers freely.

use crate::{config::ApiConfig, routes, state::AppState};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);
    let timeout = state.config.request_timeout();
    let enable_swagger = state.config.enable_swagger;

    let mut app = Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api::routes())
        .with_state(state);

    if enable_swagger {
        app = app.merge(swagger_ui());
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(cors)
            .layer(TimeoutLayer::new(timeout)),
    )
}

/// Initialize tracing/logging for the server binary.
pub fn init_tracing(config: &ApiConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new();

    if config.cors_allowed_origins.contains(&"*".to_string()) {
        cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        // In production, parse and validate allowed origins
        cors.allow_origin(Any).allow_methods(Any).allow_headers(Any)
    }
}

/// Create Swagger UI routes.
fn swagger_ui() -> SwaggerUi {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Reasoning Leaderboard API",
            version = "0.1.0",
            description = "Leaderboard service for reasoning-model benchmark results",
            license(name = "MIT"),
        ),
        servers(
            (url = "/api", description = "Leaderboard API")
        ),
        tags(
            (name = "health", description = "Health check endpoints"),
            (name = "submissions", description = "Result submissions"),
            (name = "leaderboards", description = "Leaderboard queries"),
            (name = "export", description = "CSV export"),
        )
    )]
    struct ApiDoc;

    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
