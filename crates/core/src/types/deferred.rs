//! Result of the deferred transformation step.

/// Message relayed when the command was invoked without any text.
pub const NO_TEXT_MESSAGE: &str = "No text provided.";

/// Where a [`DeferredResult`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredSource {
    /// The collaborator produced cleaned text.
    Transformed,
    /// The user supplied no text; the collaborator was not called.
    NoText,
    /// The collaborator failed; the text is its user-facing error message.
    Failed,
}

/// Text that the relay delivers to the user.
///
/// Always holds something presentable: cleaned text, the
/// [`NO_TEXT_MESSAGE`] fallback, or an error message safe to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredResult {
    /// Text to deliver.
    pub text: String,
    /// How the text was produced.
    pub source: DeferredSource,
}

impl DeferredResult {
    /// Cleaned text from the collaborator.
    #[must_use]
    pub fn transformed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: DeferredSource::Transformed,
        }
    }

    /// Fallback for an empty command.
    #[must_use]
    pub fn no_text() -> Self {
        Self {
            text: NO_TEXT_MESSAGE.to_owned(),
            source: DeferredSource::NoText,
        }
    }

    /// Collaborator failure surfaced as a message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            source: DeferredSource::Failed,
        }
    }

    /// Whether the collaborator failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.source, DeferredSource::Failed)
    }
}
