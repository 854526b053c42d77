//! Inbound Slack request, with the body read exactly once.
//!
//! The transport hands over the body as a single-read stream. The handler
//! collects it into an [`IncomingRequest`] up front and passes that value to
//! every consumer (signature check, handshake detection, form parsing), so
//! the body belongs to the request value and never to shared state.

use axum::body::Bytes;
use axum::http::HeaderMap;

/// Header carrying the request timestamp (unix seconds).
pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";

/// Header carrying the `v0=<hex>` signature.
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";

/// Immutable view of one inbound request.
pub struct IncomingRequest {
    timestamp: Option<String>,
    signature: Option<String>,
    raw_body: Bytes,
    text: String,
}

impl std::fmt::Debug for IncomingRequest {
    // The body carries the callback URL, so only its size is shown.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IncomingRequest")
            .field("timestamp", &self.timestamp)
            .field("has_signature", &self.signature.is_some())
            .field("body_len", &self.raw_body.len())
            .finish()
    }
}

impl IncomingRequest {
    /// Create a request from its parts.
    ///
    /// The text view is decoded once, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn new(timestamp: Option<String>, signature: Option<String>, raw_body: Bytes) -> Self {
        let text = String::from_utf8_lossy(&raw_body).into_owned();

        Self {
            timestamp,
            signature,
            raw_body,
            text,
        }
    }

    /// Create a request from the headers and the collected body.
    #[must_use]
    pub fn from_parts(headers: &HeaderMap, raw_body: Bytes) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };

        Self::new(header(TIMESTAMP_HEADER), header(SIGNATURE_HEADER), raw_body)
    }

    /// `X-Slack-Request-Timestamp`, if present.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// `X-Slack-Signature`, if present.
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Body bytes exactly as received; the signature covers these.
    #[must_use]
    pub fn raw_body(&self) -> &[u8] {
        &self.raw_body
    }

    /// Body as text, for parsing.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_from_parts_reads_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(TIMESTAMP_HEADER, HeaderValue::from_static("1531420618"));
        headers.insert(SIGNATURE_HEADER, HeaderValue::from_static("v0=abc"));

        let request = IncomingRequest::from_parts(&headers, Bytes::from_static(b"text=hi"));

        assert_eq!(request.timestamp(), Some("1531420618"));
        assert_eq!(request.signature(), Some("v0=abc"));
        assert_eq!(request.raw_body(), b"text=hi");
        assert_eq!(request.text(), "text=hi");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("x-slack-request-timestamp", HeaderValue::from_static("42"));

        let request = IncomingRequest::from_parts(&headers, Bytes::new());

        assert_eq!(request.timestamp(), Some("42"));
        assert_eq!(request.signature(), None);
    }

    #[test]
    fn test_invalid_utf8_keeps_raw_bytes() {
        let raw = Bytes::from_static(b"text=\xff\xfe");
        let request = IncomingRequest::new(None, None, raw);

        assert_eq!(request.raw_body(), b"text=\xff\xfe");
        assert!(request.text().starts_with("text="));
        assert!(request.text().contains('\u{FFFD}'));
    }

    #[test]
    fn test_debug_hides_body() {
        let request = IncomingRequest::new(
            Some("1".to_string()),
            Some("v0=abc".to_string()),
            Bytes::from_static(b"response_url=https%3A%2F%2Fhooks.slack.com%2Fsecret"),
        );
        let debug = format!("{request:?}");

        assert!(!debug.contains("hooks.slack.com"));
        assert!(!debug.contains("v0=abc"));
        assert!(debug.contains("body_len"));
    }
}
