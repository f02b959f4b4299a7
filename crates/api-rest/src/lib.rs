//! Reasoning Leaderboard REST API
//!
//! This crate provides the Axum-based HTTP surface for the reasoning
//! leaderboard: submission intake, leaderboard queries, CSV export, and a
//! health endpoint, with OpenAPI documentation.
//!
//! ## Architecture
//!
//! - **app**: router assembly and middleware layers
//! - **config**: environment-driven API configuration
//! - **state**: shared application state and service wiring
//! - **routes**: HTTP route handlers
//! - **error**: HTTP error handling and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use reasoning_board_api_rest::app::create_app;
//! use reasoning_board_api_rest::config::ApiConfig;
//! use reasoning_board_api_rest::state::AppState;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ApiConfig::from_env().expect("Failed to load config");
//!     let address = config.server_address();
//!     let app = create_app(AppState::new(config));
//!
//!     let listener = tokio::net::TcpListener::bind(address)
//!         .await
//!         .expect("Failed to bind");
//!
//!     axum::serve(listener, app).await.expect("Server error");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::create_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
