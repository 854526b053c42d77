//! Error types for the `OpenAI` client.

use thiserror::Error;

/// Errors that can occur when calling the completion API.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        /// HTTP status code.
        status: u16,
        /// `error.message` from the response body, if present.
        message: Option<String>,
    },

    /// Failed to parse response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API key cannot be sent as a header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),
}

impl OpenAiError {
    /// Message the API attached to a rejected request.
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_error_display() {
        let err = OpenAiError::Api {
            status: 401,
            message: Some("Incorrect API key provided".to_string()),
        };
        assert_eq!(err.to_string(), "API error (401): Incorrect API key provided");

        let err = OpenAiError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "API error (500): no message");
    }

    #[test]
    fn test_api_message() {
        let err = OpenAiError::Api {
            status: 429,
            message: Some("Rate limit reached".to_string()),
        };
        assert_eq!(err.api_message(), Some("Rate limit reached"));

        let err = OpenAiError::Api {
            status: 429,
            message: Some(String::new()),
        };
        assert_eq!(err.api_message(), None);

        assert_eq!(OpenAiError::Parse("bad".to_string()).api_message(), None);
    }
}
