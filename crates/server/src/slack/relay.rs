//! Delivery of results to a slash command's `response_url`.
//!
//! Every call is a single JSON POST; success is decided by the HTTP status
//! class alone. Nothing is retried. Callback URLs are never logged and are
//! stripped from transport errors.

use std::time::Duration;

use reqwest::Client;
use slack_clean_core::{PLACEHOLDER_TEXT, RelayOutcome, ResponseUrl};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::error::SlackError;
use super::types::ResponseMessage;

/// Timeout for a single callback POST.
const RELAY_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound on the placeholder POST, which runs before the acknowledgment and
/// must leave room inside Slack's three second deadline.
const PLACEHOLDER_TIMEOUT: Duration = Duration::from_secs(2);

/// How the final result reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Post a fresh ephemeral message.
    Send,
    /// Replace the placeholder; on rejection delete it and send fresh.
    ReplacePlaceholder,
}

/// Client for `response_url` callbacks.
#[derive(Debug, Clone)]
pub struct ResponseRelay {
    client: Client,
}

impl ResponseRelay {
    /// Create a relay with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SlackError> {
        let client = Client::builder()
            .timeout(RELAY_TIMEOUT)
            .build()
            .map_err(|e| SlackError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Create a relay on an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Post the placeholder shown while the text is cleaned.
    ///
    /// Gives up after [`PLACEHOLDER_TIMEOUT`]; a placeholder that did not
    /// land in time counts as not delivered.
    pub async fn post_placeholder(&self, url: &ResponseUrl) -> bool {
        self.post_placeholder_within(url, PLACEHOLDER_TIMEOUT).await
    }

    async fn post_placeholder_within(&self, url: &ResponseUrl, limit: Duration) -> bool {
        if let Ok(accepted) = timeout(limit, self.send_ephemeral(url, PLACEHOLDER_TEXT)).await {
            accepted
        } else {
            warn!(timeout = ?limit, "Placeholder post timed out");
            false
        }
    }

    /// Post a fresh ephemeral message.
    pub async fn send_ephemeral(&self, url: &ResponseUrl, text: &str) -> bool {
        self.post_logged(url, &ResponseMessage::ephemeral(text), "send")
            .await
    }

    /// Replace the previously posted response in place.
    pub async fn replace_original(&self, url: &ResponseUrl, text: &str) -> bool {
        self.post_logged(url, &ResponseMessage::replace(text), "replace")
            .await
    }

    /// Delete the previously posted response.
    pub async fn delete_original(&self, url: &ResponseUrl) -> bool {
        self.post_logged(url, &ResponseMessage::delete(), "delete")
            .await
    }

    /// Deliver `text` to the user.
    ///
    /// An empty callback URL is a no-op. With
    /// [`DeliveryMode::ReplacePlaceholder`] a rejected replace is followed
    /// by a best-effort delete and one fresh ephemeral message, whatever the
    /// delete's outcome.
    #[instrument(skip(self, url, text))]
    pub async fn deliver(&self, url: &ResponseUrl, text: &str, mode: DeliveryMode) -> RelayOutcome {
        let mut outcome = RelayOutcome::default();

        if url.is_empty() {
            debug!("No response_url on command, skipping relay");
            return outcome;
        }

        if mode == DeliveryMode::ReplacePlaceholder {
            outcome.record_replace(self.replace_original(url, text).await);
            if !outcome.needs_fallback() {
                return outcome;
            }

            outcome.record_delete(self.delete_original(url).await);
        }

        outcome.record_send(self.send_ephemeral(url, text).await);

        if !outcome.delivered() {
            warn!(attempts = outcome.attempts(), "Result could not be delivered, dropping it");
        }

        outcome
    }

    /// POST a message and report whether Slack accepted it.
    async fn post_logged(&self, url: &ResponseUrl, message: &ResponseMessage, step: &str) -> bool {
        if url.is_empty() {
            return false;
        }

        match self.post(url, message).await {
            Ok(()) => {
                debug!(step, "Responded to Slack response_url");
                true
            }
            Err(e) => {
                warn!(step, error = %e, "Slack response_url call failed");
                false
            }
        }
    }

    async fn post(&self, url: &ResponseUrl, message: &ResponseMessage) -> Result<(), SlackError> {
        let response = self
            .client
            .post(url.expose())
            .json(message)
            .send()
            .await
            .map_err(SlackError::request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlackError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
