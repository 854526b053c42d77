//! Slack-related errors.

use thiserror::Error;

/// Errors that can occur when talking to Slack.
///
/// Messages never contain callback URLs or credentials.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP request failed before a response arrived.
    #[error("Slack request failed: {0}")]
    Request(String),

    /// Slack answered with a non-2xx status.
    #[error("Slack rejected the request with status {0}")]
    Rejected(u16),

    /// Failed to parse response.
    #[error("Slack response error: {0}")]
    Response(String),

    /// Slack Web API returned `ok: false`.
    #[error("Slack API error: {0}")]
    Api(String),

    /// Configuration error.
    #[error("Slack configuration error: {0}")]
    Config(String),
}

impl SlackError {
    /// Build a request error with the target URL stripped.
    pub(crate) fn request(error: reqwest::Error) -> Self {
        Self::Request(error.without_url().to_string())
    }
}
