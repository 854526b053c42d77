//! Unified error handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::ConfigError;
use crate::openai::OpenAiError;
use crate::slack::{AuthRejection, SlackError};

/// Body returned for every rejected signature.
pub const UNAUTHORIZED_BODY: &str = "invalid signature";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed signature verification.
    #[error("Unauthorized: {0}")]
    Unauthorized(AuthRejection),

    /// No route matched.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Slack client setup or call failed.
    #[error("Slack error: {0}")]
    Slack(#[from] SlackError),

    /// `OpenAI` client setup or call failed.
    #[error("OpenAI error: {0}")]
    OpenAi(#[from] OpenAiError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthRejection> for AppError {
    fn from(rejection: AuthRejection) -> Self {
        Self::Unauthorized(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized(reason) => {
                tracing::warn!(reason = %reason, "Rejected Slack request");
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Slack(_) | Self::OpenAi(_) | Self::Internal(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Unauthorized(_) => UNAUTHORIZED_BODY,
            Self::NotFound(_) => "Not Found",
            _ => "Internal server error",
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_text(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8(body.to_vec()).expect("utf8"))
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Unauthorized(AuthRejection::StaleTimestamp);
        assert_eq!(err.to_string(), "Unauthorized: stale-timestamp");

        let err = AppError::NotFound("/nope".to_string());
        assert_eq!(err.to_string(), "Not found: /nope");
    }

    #[tokio::test]
    async fn test_unauthorized_hides_reason() {
        for reason in [
            AuthRejection::MissingSecret,
            AuthRejection::StaleTimestamp,
            AuthRejection::BadSignature,
        ] {
            let (status, body) = body_text(reason.into()).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "invalid signature");
        }
    }

    #[tokio::test]
    async fn test_app_error_status_codes() {
        let (status, body) = body_text(AppError::NotFound("/x".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");

        let (status, body) = body_text(AppError::Internal("secret detail".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal server error");

        let (status, _) = body_text(SlackError::Rejected(500).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
