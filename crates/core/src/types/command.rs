//! Slash-command body parsing.
//!
//! Slack delivers slash commands as `application/x-www-form-urlencoded`
//! bodies, but the Events API handshake (`url_verification`) arrives as JSON
//! on the same endpoint. [`parse_command`] tells the two apart with a cheap
//! first-character check rather than content-type negotiation.

use serde::Deserialize;
use url::form_urlencoded;

use super::response_url::ResponseUrl;

/// Event type Slack sends when verifying an endpoint URL.
const URL_VERIFICATION: &str = "url_verification";

/// Slash-command invocation extracted from a form-encoded body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlashCommandPayload {
    /// Text typed after the command. May be empty.
    pub text: String,
    /// Callback URL for deferred responses. Empty when absent.
    pub response_url: ResponseUrl,
}

impl SlashCommandPayload {
    /// Parse a form-encoded slash-command body.
    ///
    /// Missing fields default to empty strings; malformed input never fails.
    #[must_use]
    pub fn from_form(body: &str) -> Self {
        let mut text = None;
        let mut response_url = None;

        // First occurrence wins, matching URLSearchParams.get.
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            match key.as_ref() {
                "text" => {
                    text.get_or_insert_with(|| value.into_owned());
                }
                "response_url" => {
                    response_url.get_or_insert_with(|| ResponseUrl::from(value.into_owned()));
                }
                _ => {}
            }
        }

        Self {
            text: text.unwrap_or_default(),
            response_url: response_url.unwrap_or_default(),
        }
    }
}

/// Endpoint verification challenge from the Events API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeChallenge {
    /// Value that must be echoed back verbatim.
    pub challenge: String,
}

/// A parsed inbound body: either a handshake or a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundCommand {
    /// `url_verification` handshake; echo the challenge and do nothing else.
    Handshake(HandshakeChallenge),
    /// Slash-command invocation.
    SlashCommand(SlashCommandPayload),
}

#[derive(Deserialize)]
struct MaybeHandshake {
    #[serde(rename = "type")]
    event_type: Option<String>,
    challenge: Option<String>,
}

/// Parse a request body into a handshake or a slash command.
///
/// JSON is only attempted when the first non-whitespace character is `{`.
/// Any JSON failure, or JSON that is not a `url_verification` event with a
/// non-empty challenge, falls through to form parsing.
///
/// ## Examples
///
/// ```
/// use slack_clean_core::{InboundCommand, parse_command};
///
/// let handshake = parse_command(r#"{"type":"url_verification","challenge":"abc123"}"#);
/// assert!(matches!(handshake, InboundCommand::Handshake(h) if h.challenge == "abc123"));
///
/// let command = parse_command("text=hello+world&response_url=https%3A%2F%2Fhooks.example%2Fabc");
/// let InboundCommand::SlashCommand(payload) = command else { panic!("expected command") };
/// assert_eq!(payload.text, "hello world");
/// assert_eq!(payload.response_url.expose(), "https://hooks.example/abc");
/// ```
#[must_use]
pub fn parse_command(body: &str) -> InboundCommand {
    if let Some(handshake) = detect_handshake(body) {
        return InboundCommand::Handshake(handshake);
    }

    InboundCommand::SlashCommand(SlashCommandPayload::from_form(body))
}

fn detect_handshake(body: &str) -> Option<HandshakeChallenge> {
    if !body.trim_start().starts_with('{') {
        return None;
    }

    let parsed: MaybeHandshake = serde_json::from_str(body).ok()?;

    match (parsed.event_type.as_deref(), parsed.challenge) {
        (Some(URL_VERIFICATION), Some(challenge)) if !challenge.is_empty() => {
            Some(HandshakeChallenge { challenge })
        }
        _ => None,
    }
}
