//! Bookkeeping for callback URL deliveries.
//!
//! The relay runs one of two short, non-retrying chains:
//!
//! ```text
//! plain:    send ──► Sent | SendFailed
//! replace:  replace ──► Replaced
//!              └─(rejected)─► delete (ignored) ──► send ──► Sent | SendFailed
//! ```
//!
//! [`RelayOutcome`] records which steps ran and whether each succeeded, so the
//! relay can decide on the fallback and callers can observe the end state.

/// Terminal state of a relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayState {
    /// No callback URL; nothing was sent.
    Skipped,
    /// The placeholder was replaced in place.
    Replaced,
    /// A fresh ephemeral message was accepted.
    Sent,
    /// The final ephemeral message was rejected and dropped.
    SendFailed,
}

/// Which delivery attempts ran and whether they were accepted.
///
/// `None` means the step did not run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayOutcome {
    /// `replace_original` attempt.
    pub replaced: Option<bool>,
    /// `delete_original` attempt. Its result never changes the flow.
    pub deleted: Option<bool>,
    /// Fresh ephemeral message.
    pub sent: Option<bool>,
}

impl RelayOutcome {
    /// Record the replace attempt.
    pub const fn record_replace(&mut self, accepted: bool) {
        self.replaced = Some(accepted);
    }

    /// Record the delete attempt.
    pub const fn record_delete(&mut self, accepted: bool) {
        self.deleted = Some(accepted);
    }

    /// Record the ephemeral send.
    pub const fn record_send(&mut self, accepted: bool) {
        self.sent = Some(accepted);
    }

    /// Whether the replace was rejected and the fallback chain must run.
    #[must_use]
    pub fn needs_fallback(&self) -> bool {
        self.replaced == Some(false)
    }

    /// Number of HTTP calls made.
    #[must_use]
    pub fn attempts(&self) -> usize {
        [self.replaced, self.deleted, self.sent]
            .iter()
            .filter(|step| step.is_some())
            .count()
    }

    /// Terminal state reached.
    #[must_use]
    pub fn state(&self) -> RelayState {
        if self.replaced == Some(true) {
            return RelayState::Replaced;
        }

        match self.sent {
            Some(true) => RelayState::Sent,
            Some(false) => RelayState::SendFailed,
            None => RelayState::Skipped,
        }
    }

    /// Whether the user ended up seeing the result.
    #[must_use]
    pub fn delivered(&self) -> bool {
        matches!(self.state(), RelayState::Replaced | RelayState::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_skipped() {
        let outcome = RelayOutcome::default();
        assert_eq!(outcome.state(), RelayState::Skipped);
        assert_eq!(outcome.attempts(), 0);
        assert!(!outcome.delivered());
    }

    #[test]
    fn test_replace_success_is_terminal() {
        let mut outcome = RelayOutcome::default();
        outcome.record_replace(true);
        assert!(!outcome.needs_fallback());
        assert_eq!(outcome.state(), RelayState::Replaced);
        assert_eq!(outcome.attempts(), 1);
    }

    #[test]
    fn test_replace_failure_then_fallback() {
        let mut outcome = RelayOutcome::default();
        outcome.record_replace(false);
        assert!(outcome.needs_fallback());

        outcome.record_delete(false);
        outcome.record_send(true);
        assert_eq!(outcome.state(), RelayState::Sent);
        assert_eq!(outcome.attempts(), 3);
        assert!(outcome.delivered());
    }

    #[test]
    fn test_send_failure() {
        let mut outcome = RelayOutcome::default();
        outcome.record_send(false);
        assert_eq!(outcome.state(), RelayState::SendFailed);
        assert!(!outcome.delivered());
    }
}
