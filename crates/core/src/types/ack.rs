//! Acknowledgment strategies for slash commands.
//!
//! Slack requires a response within three seconds. Every mode answers
//! immediately and leaves the slow work to the deferred pipeline; they differ
//! in what the user sees while waiting.

use core::fmt;
use core::str::FromStr;

/// Placeholder shown while the text is being cleaned.
pub const PLACEHOLDER_TEXT: &str = "Cleaning…";

/// Error returned when parsing an unknown [`AckMode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ack mode '{0}', expected one of: empty, replace, inline")]
pub struct AckModeError(pub String);

/// How the synchronous slash-command response is produced.
///
/// ## Examples
///
/// ```
/// use slack_clean_core::AckMode;
///
/// assert_eq!("replace".parse::<AckMode>().unwrap(), AckMode::EphemeralThenReplace);
/// assert_eq!(AckMode::default(), AckMode::Empty);
/// assert!("loud".parse::<AckMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AckMode {
    /// Empty 200; the only user-visible message comes from the relay.
    #[default]
    Empty,
    /// Post a placeholder to the callback URL first, replace it later.
    EphemeralThenReplace,
    /// Return the placeholder as the JSON body of the 200.
    InlineJson,
}

impl AckMode {
    /// Configuration name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::EphemeralThenReplace => "replace",
            Self::InlineJson => "inline",
        }
    }

    /// Whether the final delivery replaces a previously posted placeholder.
    #[must_use]
    pub const fn replaces_placeholder(self) -> bool {
        matches!(self, Self::EphemeralThenReplace)
    }
}

impl fmt::Display for AckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AckMode {
    type Err = AckModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "replace" | "ephemeral-then-replace" => Ok(Self::EphemeralThenReplace),
            "inline" | "inline-json" => Ok(Self::InlineJson),
            other => Err(AckModeError(other.to_owned())),
        }
    }
}
