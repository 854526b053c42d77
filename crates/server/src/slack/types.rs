//! Slack message payloads.
//!
//! See: <https://api.slack.com/interactivity/handling#message_responses>

use serde::{Deserialize, Serialize};

/// Message posted to a slash command's `response_url`.
///
/// The same shape covers fresh ephemeral messages, in-place replacement and
/// deletion of the original response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// `ephemeral` (only the invoking user sees it) or absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    /// Replace the previously posted response.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub replace_original: bool,
    /// Delete the previously posted response.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub delete_original: bool,
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ResponseMessage {
    /// `{"response_type":"ephemeral","text":...}`
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: Some("ephemeral".to_string()),
            replace_original: false,
            delete_original: false,
            text: Some(text.into()),
        }
    }

    /// `{"response_type":"ephemeral","replace_original":true,"text":...}`
    #[must_use]
    pub fn replace(text: impl Into<String>) -> Self {
        Self {
            replace_original: true,
            ..Self::ephemeral(text)
        }
    }

    /// `{"delete_original":true}`
    #[must_use]
    pub const fn delete() -> Self {
        Self {
            response_type: None,
            replace_original: false,
            delete_original: true,
            text: None,
        }
    }
}

/// `chat.postMessage` request body.
#[derive(Debug, Clone, Serialize)]
pub struct PostMessage {
    /// Channel ID to post to.
    pub channel: String,
    /// Message text.
    pub text: String,
}

/// Response from `chat.postMessage`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the request succeeded.
    pub ok: bool,
    /// Error code if failed.
    pub error: Option<String>,
    /// Message timestamp (used as message ID).
    pub ts: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_ephemeral_shape() {
        let value = serde_json::to_value(ResponseMessage::ephemeral("hello")).expect("serialize");
        assert_eq!(value, json!({"response_type": "ephemeral", "text": "hello"}));
    }

    #[test]
    fn test_replace_shape() {
        let value = serde_json::to_value(ResponseMessage::replace("hello")).expect("serialize");
        assert_eq!(
            value,
            json!({"response_type": "ephemeral", "replace_original": true, "text": "hello"})
        );
    }

    #[test]
    fn test_delete_shape() {
        let value = serde_json::to_value(ResponseMessage::delete()).expect("serialize");
        assert_eq!(value, json!({"delete_original": true}));
    }

    #[test]
    fn test_post_message_response_deserialization() {
        let response: PostMessageResponse =
            serde_json::from_str(r#"{"ok":false,"error":"channel_not_found"}"#)
                .expect("deserialize");
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("channel_not_found"));
        assert!(response.ts.is_none());
    }
}
