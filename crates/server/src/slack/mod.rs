//! Slack integration for the slash-command relay.
//!
//! This module provides:
//! - [`IncomingRequest`] holding the signature headers and the body, read once
//! - [`SignatureVerifier`] for request signing with replay protection
//! - [`ResponseRelay`] for posting to a command's `response_url`
//! - [`SlackClient`] for posting to a channel through the Web API
//!
//! # Flow
//!
//! 1. Slack posts the slash command, signed with the app's signing secret
//! 2. The handler reads the body once and verifies the signature
//! 3. The command is acknowledged inside Slack's three second deadline
//! 4. The cleaned text is relayed to `response_url` from a background task

mod client;
mod error;
mod relay;
mod request;
mod signature;
mod types;

pub use client::SlackClient;
pub use error::SlackError;
pub use relay::{DeliveryMode, ResponseRelay};
pub use request::{IncomingRequest, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use signature::{AuthRejection, REPLAY_WINDOW_SECS, SignatureVerifier, SigningKey};
pub use types::{PostMessage, PostMessageResponse, ResponseMessage};
