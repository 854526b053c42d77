//! Core types for slack-clean.
//!
//! This module provides type-safe wrappers for the slash-command protocol.

pub mod ack;
pub mod command;
pub mod deferred;
pub mod relay;
pub mod response_url;

pub use ack::{AckMode, AckModeError, PLACEHOLDER_TEXT};
pub use command::{HandshakeChallenge, InboundCommand, SlashCommandPayload, parse_command};
pub use deferred::{DeferredResult, DeferredSource, NO_TEXT_MESSAGE};
pub use relay::{RelayOutcome, RelayState};
pub use response_url::ResponseUrl;
