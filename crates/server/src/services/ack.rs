//! Slash command acknowledgment.
//!
//! Slack expects an answer within three seconds. The dispatcher answers
//! according to the configured [`AckMode`] and hands the slow work
//! (transformation and relay) to a detached background task that the
//! handler never awaits.

use axum::Json;
use axum::response::{IntoResponse, Response};
use slack_clean_core::{AckMode, PLACEHOLDER_TEXT, SlashCommandPayload};
use tracing::{info, instrument, warn};

use super::background::BackgroundTasks;
use super::deferred::DeferredProcessor;
use crate::slack::{DeliveryMode, ResponseMessage, ResponseRelay};

/// Sends the synchronous acknowledgment and schedules the deferred pipeline.
#[derive(Debug, Clone)]
pub struct AckDispatcher {
    mode: AckMode,
    relay: ResponseRelay,
    processor: DeferredProcessor,
    tasks: BackgroundTasks,
}

impl AckDispatcher {
    /// Create a dispatcher.
    #[must_use]
    pub const fn new(
        mode: AckMode,
        relay: ResponseRelay,
        processor: DeferredProcessor,
        tasks: BackgroundTasks,
    ) -> Self {
        Self {
            mode,
            relay,
            processor,
            tasks,
        }
    }

    /// Acknowledge `payload` and spawn its deferred pipeline.
    ///
    /// In replace mode the placeholder is posted before returning. If it is
    /// not accepted there is nothing to replace, so the result is sent as a
    /// fresh message instead.
    #[instrument(skip_all, fields(mode = %self.mode, text_len = payload.text.len()))]
    pub async fn dispatch(&self, payload: SlashCommandPayload) -> Response {
        let delivery = if self.mode.replaces_placeholder()
            && self.relay.post_placeholder(&payload.response_url).await
        {
            DeliveryMode::ReplacePlaceholder
        } else {
            DeliveryMode::Send
        };

        self.spawn_pipeline(payload, delivery);

        match self.mode {
            AckMode::InlineJson => Json(ResponseMessage::ephemeral(PLACEHOLDER_TEXT)).into_response(),
            AckMode::Empty | AckMode::EphemeralThenReplace => ().into_response(),
        }
    }

    fn spawn_pipeline(&self, payload: SlashCommandPayload, delivery: DeliveryMode) {
        let processor = self.processor.clone();
        let relay = self.relay.clone();

        self.tasks.spawn("slash_command", async move {
            let result = processor.process(&payload.text).await;
            let outcome = relay
                .deliver(&payload.response_url, &result.text, delivery)
                .await;

            if result.is_failure() {
                warn!(
                    source = ?result.source,
                    state = ?outcome.state(),
                    attempts = outcome.attempts(),
                    "Slash command finished with a transformation error"
                );
            } else {
                info!(
                    source = ?result.source,
                    state = ?outcome.state(),
                    attempts = outcome.attempts(),
                    "Slash command finished"
                );
            }
        });
    }
}
