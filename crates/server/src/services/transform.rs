//! Text transformation seam.
//!
//! The deferred pipeline depends on [`TextTransformer`] rather than on the
//! `OpenAI` client directly, so tests can substitute their own implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::openai::{OpenAiClient, OpenAiError};

/// Message shown when a failure carries no presentable text.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// Why a transformation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The upstream service rejected the request with a message.
    #[error("transformation rejected: {0}")]
    Rejected(String),

    /// The upstream service could not be reached or answered garbage.
    #[error("transformation unavailable: {0}")]
    Unavailable(String),
}

impl TransformError {
    /// Text safe to show the invoking user.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected(message) if !message.is_empty() => message,
            _ => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

impl From<OpenAiError> for TransformError {
    fn from(error: OpenAiError) -> Self {
        match error.api_message() {
            Some(message) => Self::Rejected(message.to_string()),
            None => Self::Unavailable(error.to_string()),
        }
    }
}

/// Turns user text into cleaned text.
#[async_trait]
pub trait TextTransformer: Send + Sync {
    /// Transform `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] if the text could not be transformed.
    async fn transform(&self, text: &str) -> Result<String, TransformError>;
}

#[async_trait]
impl TextTransformer for OpenAiClient {
    async fn transform(&self, text: &str) -> Result<String, TransformError> {
        Ok(self.complete(text).await?)
    }
}
