//! Slack request signing.
//!
//! This implements Slack's signature verification:
//! <https://api.slack.com/authentication/verifying-requests-from-slack>
//!
//! The HMAC key is derived once at startup ([`SigningKey`]) and shared by
//! reference; each verification clones the keyed state instead of re-keying.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use thiserror::Error;
use tracing::{debug, instrument};

use super::error::SlackError;
use super::request::IncomingRequest;

/// Maximum age of a request timestamp, in seconds.
pub const REPLAY_WINDOW_SECS: i64 = 300;

/// Signature scheme version prefix.
const SIGNATURE_VERSION: &str = "v0";

/// Why a request failed verification.
///
/// Displayed only in logs; clients always see a bare 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AuthRejection {
    /// No signing secret is configured.
    #[error("missing-secret")]
    MissingSecret,
    /// Timestamp header absent, non-numeric, or outside the replay window.
    #[error("stale-timestamp")]
    StaleTimestamp,
    /// Signature header does not match the computed signature.
    #[error("bad-signature")]
    BadSignature,
}

/// HMAC-SHA256 key derived from the Slack signing secret.
///
/// Created once at startup and never logged.
#[derive(Clone)]
pub struct SigningKey {
    mac: Hmac<Sha256>,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

impl SigningKey {
    /// Derive the key from the signing secret.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::Config` if the secret is empty or the key cannot
    /// be initialized.
    pub fn new(secret: &SecretString) -> Result<Self, SlackError> {
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(SlackError::Config("signing secret is empty".to_string()));
        }

        let mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|e| SlackError::Config(e.to_string()))?;

        Ok(Self { mac })
    }

    /// Compute `v0=<hex>` over `v0:{timestamp}:{body}`.
    #[must_use]
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(SIGNATURE_VERSION.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);

        format!("{SIGNATURE_VERSION}={}", hex::encode(mac.finalize().into_bytes()))
    }
}

/// Verifies that requests were signed by Slack and are not replays.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    key: Option<SigningKey>,
}

impl SignatureVerifier {
    /// Create a verifier. Without a key every request is rejected.
    #[must_use]
    pub const fn new(key: Option<SigningKey>) -> Self {
        Self { key }
    }

    /// Create a verifier from an optional signing secret.
    ///
    /// # Errors
    ///
    /// Returns error if a secret is present but cannot be turned into a key.
    pub fn from_secret(secret: Option<&SecretString>) -> Result<Self, SlackError> {
        secret.map(SigningKey::new).transpose().map(Self::new)
    }

    /// Whether a signing key is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.key.is_some()
    }

    /// Verify a request against the signing key at time `now` (unix seconds).
    ///
    /// Checks, in order: a key is configured, the timestamp is numeric and
    /// no more than [`REPLAY_WINDOW_SECS`] old, and the signature matches.
    /// Timestamps in the future are accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthRejection`] reason on failure.
    #[instrument(skip_all)]
    pub fn verify(&self, request: &IncomingRequest, now: i64) -> Result<(), AuthRejection> {
        let key = self.key.as_ref().ok_or(AuthRejection::MissingSecret)?;

        let timestamp = request.timestamp().ok_or(AuthRejection::StaleTimestamp)?;
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| AuthRejection::StaleTimestamp)?;

        if ts < now.saturating_sub(REPLAY_WINDOW_SECS) {
            return Err(AuthRejection::StaleTimestamp);
        }

        let expected = key.sign(timestamp, request.raw_body());
        let supplied = request.signature().unwrap_or_default();

        if !constant_time_eq(expected.as_bytes(), supplied.as_bytes()) {
            return Err(AuthRejection::BadSignature);
        }

        debug!("Slack signature verified");

        Ok(())
    }
}

/// Constant-time byte comparison.
///
/// Returns early only on a length mismatch; otherwise every byte pair is
/// XORed into the accumulator before the single final comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    std::hint::black_box(diff) == 0
}
