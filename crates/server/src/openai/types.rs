//! Types for the chat completions API.

use serde::{Deserialize, Serialize};

/// A message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// `system`, `user` or `assistant`.
    pub role: String,
    /// Message text.
    pub content: String,
}

impl Message {
    /// System message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// User message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "gpt-4o").
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
}

/// Response from `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Generated choices; only the first is used.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// Content of the first choice, if any and non-empty.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// A generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Generated message.
    pub message: ChoiceMessage,
}

/// Message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text. Absent for refusals and tool calls.
    pub content: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiError,
}

/// Error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub message: Option<String>,
    /// Error type, e.g. `invalid_request_error`.
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}
