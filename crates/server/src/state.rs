//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::openai::OpenAiClient;
use crate::services::{AckDispatcher, BackgroundTasks, DeferredProcessor, TextTransformer};
use crate::slack::{ResponseRelay, SignatureVerifier};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Everything inside is read-only after
/// startup; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    verifier: SignatureVerifier,
    dispatcher: AckDispatcher,
    tasks: BackgroundTasks,
    command_path: String,
}

impl AppState {
    /// Build the state from configuration.
    ///
    /// The signing key is derived here, once.
    ///
    /// # Errors
    ///
    /// Returns an error if the signing key or an HTTP client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let verifier = SignatureVerifier::from_secret(config.slack.signing_secret.as_ref())?;
        if !verifier.is_configured() {
            tracing::warn!("SLACK_SIGNING_SECRET not set, every Slack request will be rejected");
        }

        let openai = OpenAiClient::new(&config.openai)?;
        let relay = ResponseRelay::new()?;

        Ok(Self::from_parts(
            verifier,
            config.ack_mode,
            relay,
            Arc::new(openai),
            config.command_path.clone(),
        ))
    }

    /// Assemble the state from already-built parts.
    #[must_use]
    pub fn from_parts(
        verifier: SignatureVerifier,
        ack_mode: slack_clean_core::AckMode,
        relay: ResponseRelay,
        transformer: Arc<dyn TextTransformer>,
        command_path: String,
    ) -> Self {
        let tasks = BackgroundTasks::new();
        let dispatcher = AckDispatcher::new(
            ack_mode,
            relay,
            DeferredProcessor::new(transformer),
            tasks.clone(),
        );

        Self {
            inner: Arc::new(AppStateInner {
                verifier,
                dispatcher,
                tasks,
                command_path,
            }),
        }
    }

    /// Get a reference to the signature verifier.
    #[must_use]
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.inner.verifier
    }

    /// Get a reference to the acknowledgment dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &AckDispatcher {
        &self.inner.dispatcher
    }

    /// Get a reference to the background task tracker.
    #[must_use]
    pub fn tasks(&self) -> &BackgroundTasks {
        &self.inner.tasks
    }

    /// Route the slash command is mounted at.
    #[must_use]
    pub fn command_path(&self) -> &str {
        &self.inner.command_path
    }
}
