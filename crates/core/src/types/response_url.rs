//! Callback URL issued by Slack for a single slash-command invocation.

use core::fmt;

/// Single-use, time-limited callback URL for one slash-command invocation.
///
/// The URL is a bearer capability: anyone holding it can post into the
/// invoking user's session. `Debug` is redacted and the type has no `Display`
/// implementation; it must never be logged.
///
/// An empty URL is valid and marks a no-op relay target.
///
/// ## Examples
///
/// ```
/// use slack_clean_core::ResponseUrl;
///
/// let url = ResponseUrl::new("https://hooks.slack.com/commands/T1/2/abc");
/// assert!(!url.is_empty());
/// assert_eq!(format!("{url:?}"), "ResponseUrl([REDACTED])");
///
/// assert!(ResponseUrl::default().is_empty());
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResponseUrl(String);

impl ResponseUrl {
    /// Wrap a callback URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL to post to. Only pass this to the HTTP client.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the platform omitted the callback URL.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ResponseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("ResponseUrl(<empty>)")
        } else {
            f.write_str("ResponseUrl([REDACTED])")
        }
    }
}

impl From<String> for ResponseUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for ResponseUrl {
    fn from(url: &str) -> Self {
        Self(url.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_shows_url() {
        let url = ResponseUrl::new("https://hooks.slack.com/commands/T1/2/secret-token");
        let debug = format!("{url:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_empty_and_whitespace_are_empty() {
        assert!(ResponseUrl::new("").is_empty());
        assert!(ResponseUrl::new("   ").is_empty());
        assert_eq!(format!("{:?}", ResponseUrl::default()), "ResponseUrl(<empty>)");
    }

    #[test]
    fn test_expose_returns_original() {
        let url = ResponseUrl::from("https://hooks.example/abc");
        assert_eq!(url.expose(), "https://hooks.example/abc");
    }
}
