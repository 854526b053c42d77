//! Slack slash-command server library.
//!
//! Verifies signed slash commands from Slack, acknowledges them inside the
//! three second deadline, cleans up the user's text with `OpenAI` in the
//! background and relays the result through the command's `response_url`.
//!
//! # Security
//!
//! - Every command must carry a valid `v0` signature no older than five minutes
//! - Without a signing secret every request is rejected
//! - Secrets and callback URLs never appear in logs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod openai;
pub mod routes;
pub mod services;
pub mod slack;
pub mod state;

use axum::Router;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the application router with tracing, request IDs and Sentry.
#[must_use]
pub fn app(state: AppState) -> Router {
    let command_path = state.command_path().to_string();

    Router::new()
        .merge(routes::routes(&command_path))
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri().path(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
