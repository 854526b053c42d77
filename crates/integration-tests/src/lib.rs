//! Integration test helpers for slack-clean.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; Slack's
//! `response_url` endpoint and the Web API are simulated with `wiremock`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p slack-clean-integration-tests
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use secrecy::SecretString;
use slack_clean_core::AckMode;
use slack_clean_server::services::{TextTransformer, TransformError};
use slack_clean_server::slack::{
    ResponseRelay, SIGNATURE_HEADER, SignatureVerifier, SigningKey, TIMESTAMP_HEADER,
};
use slack_clean_server::state::AppState;

/// Signing secret shared by the test app and the request builder.
pub const SIGNING_SECRET: &str = "8f14e45fceea167a5a36dedd4bea2543";

/// Route the test app mounts the slash command at.
pub const COMMAND_PATH: &str = "/slack/clean";

/// Transformer returning a fixed result and counting calls.
pub struct StubTransformer {
    calls: AtomicUsize,
    result: Result<String, TransformError>,
}

impl StubTransformer {
    /// Always succeed with `text`.
    #[must_use]
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            result: Ok(text.to_string()),
        })
    }

    /// Always fail with `error`.
    #[must_use]
    pub fn failing(error: TransformError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            result: Err(error),
        })
    }

    /// Number of `transform` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextTransformer for StubTransformer {
    async fn transform(&self, _text: &str) -> Result<String, TransformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Transformer that upper-cases its input.
pub struct UppercaseTransformer;

#[async_trait]
impl TextTransformer for UppercaseTransformer {
    async fn transform(&self, text: &str) -> Result<String, TransformError> {
        Ok(text.to_uppercase())
    }
}

/// Signing key for [`SIGNING_SECRET`].
///
/// # Panics
///
/// Never; the secret is non-empty.
#[must_use]
pub fn signing_key() -> SigningKey {
    SigningKey::new(&SecretString::from(SIGNING_SECRET)).expect("valid signing key")
}

/// Build app state with the test signing key.
#[must_use]
pub fn test_state(mode: AckMode, transformer: Arc<dyn TextTransformer>) -> AppState {
    state_with_verifier(
        SignatureVerifier::new(Some(signing_key())),
        mode,
        transformer,
    )
}

/// Build app state with an explicit verifier.
///
/// # Panics
///
/// Panics if the relay HTTP client cannot be built.
#[must_use]
pub fn state_with_verifier(
    verifier: SignatureVerifier,
    mode: AckMode,
    transformer: Arc<dyn TextTransformer>,
) -> AppState {
    AppState::from_parts(
        verifier,
        mode,
        ResponseRelay::new().expect("relay client"),
        transformer,
        COMMAND_PATH.to_string(),
    )
}

/// Current unix time in seconds.
#[must_use]
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Form-encode a slash-command body.
#[must_use]
pub fn form_body(text: &str, response_url: Option<&str>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer
        .append_pair("token", "legacy-verification-token")
        .append_pair("command", "/clean")
        .append_pair("text", text);
    if let Some(url) = response_url {
        serializer.append_pair("response_url", url);
    }
    serializer.finish()
}

/// A POST to the command path signed at `timestamp`.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn signed_request(body: &str, timestamp: i64) -> Request<Body> {
    let ts = timestamp.to_string();
    let signature = signing_key().sign(&ts, body.as_bytes());

    Request::post(COMMAND_PATH)
        .header("content-type", "application/x-www-form-urlencoded")
        .header(TIMESTAMP_HEADER, ts)
        .header(SIGNATURE_HEADER, signature)
        .body(Body::from(body.to_owned()))
        .expect("request")
}

/// Collect a response body as text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
