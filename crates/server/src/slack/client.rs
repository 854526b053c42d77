//! Slack Web API client.
//!
//! Posts plain-text messages to a configured channel with a bot token.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, error, instrument};

use super::error::SlackError;
use super::types::{PostMessage, PostMessageResponse};
use crate::config::SlackBotConfig;

/// Slack API client for posting messages.
#[derive(Clone)]
pub struct SlackClient {
    /// HTTP client.
    client: Client,
    /// Web API base URL, without trailing slash.
    api_url: String,
    /// Bot token for authentication.
    bot_token: SecretString,
    /// Channel messages are posted to.
    channel: String,
}

impl std::fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClient")
            .field("api_url", &self.api_url)
            .field("bot_token", &"[REDACTED]")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    /// Create a new Slack client.
    #[must_use]
    pub fn new(api_url: impl Into<String>, bot_token: SecretString, channel: String) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            bot_token,
            channel,
        }
    }

    /// Create a client from configuration.
    #[must_use]
    pub fn from_config(api_url: &str, bot: &SlackBotConfig) -> Self {
        Self::new(api_url, bot.bot_token.clone(), bot.channel_id.clone())
    }

    /// Post a message to the configured channel.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, Slack answers with a non-2xx
    /// status, or the API reports `ok: false`.
    #[instrument(skip(self, text), fields(channel = %self.channel))]
    pub async fn post_message(&self, text: &str) -> Result<PostMessageResponse, SlackError> {
        let message = PostMessage {
            channel: self.channel.clone(),
            text: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.api_url))
            .bearer_auth(self.bot_token.expose_secret())
            .json(&message)
            .send()
            .await
            .map_err(SlackError::request)?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Slack API returned error status");
            return Err(SlackError::Rejected(status.as_u16()));
        }

        let result: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| SlackError::Response(e.to_string()))?;

        if !result.ok {
            error!(error = ?result.error, "Slack API error posting message");
            return Err(SlackError::Api(
                result.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        debug!(ts = ?result.ts, "Message posted to Slack");

        Ok(result)
    }
}
