//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//! POST <SLACK_COMMAND_PATH>    - Slash command (default /slack/clean)
//! *                            - 404 Not Found
//! ```

pub mod slack;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Build the router for the given slash-command path.
pub fn routes(command_path: &str) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(slack::router(command_path))
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
