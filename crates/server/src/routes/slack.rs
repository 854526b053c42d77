//! Slack slash-command handler.
//!
//! The body is collected once, verified against the signing key, parsed,
//! and acknowledged. Transformation and delivery run after the response.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::post,
};
use slack_clean_core::{InboundCommand, parse_command};
use tracing::{debug, instrument};

use crate::error::AppError;
use crate::slack::IncomingRequest;
use crate::state::AppState;

/// Create slash-command routes.
pub fn router(command_path: &str) -> Router<AppState> {
    Router::new().route(command_path, post(handle_command))
}

/// Handle a slash command or a URL verification handshake.
#[instrument(skip_all)]
async fn handle_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = IncomingRequest::from_parts(&headers, body);

    state
        .verifier()
        .verify(&request, chrono::Utc::now().timestamp())?;

    match parse_command(request.text()) {
        InboundCommand::Handshake(handshake) => {
            debug!("Answering URL verification handshake");
            Ok(handshake.challenge.into_response())
        }
        InboundCommand::SlashCommand(payload) => Ok(state.dispatcher().dispatch(payload).await),
    }
}
