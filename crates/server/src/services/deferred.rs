//! Deferred transformation of a command's text.

use std::sync::Arc;

use slack_clean_core::DeferredResult;
use tracing::{instrument, warn};

use super::transform::TextTransformer;

/// Produces the text relayed back to the user.
#[derive(Clone)]
pub struct DeferredProcessor {
    transformer: Arc<dyn TextTransformer>,
}

impl std::fmt::Debug for DeferredProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredProcessor").finish_non_exhaustive()
    }
}

impl DeferredProcessor {
    /// Create a processor around a transformer.
    #[must_use]
    pub fn new(transformer: Arc<dyn TextTransformer>) -> Self {
        Self { transformer }
    }

    /// Transform `text`, or explain why there is nothing to show.
    ///
    /// Empty text short-circuits to the no-text message without calling the
    /// transformer. Failures become a user-facing message; they never
    /// propagate.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn process(&self, text: &str) -> DeferredResult {
        if text.is_empty() {
            return DeferredResult::no_text();
        }

        match self.transformer.transform(text).await {
            Ok(cleaned) => DeferredResult::transformed(cleaned),
            Err(e) => {
                warn!(error = %e, "Text transformation failed");
                DeferredResult::failed(e.user_message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use slack_clean_core::{DeferredSource, NO_TEXT_MESSAGE};

    use super::*;
    use crate::services::transform::{TransformError, UNKNOWN_ERROR_MESSAGE};

    struct Stub {
        calls: AtomicUsize,
        result: Result<String, TransformError>,
    }

    impl Stub {
        fn new(result: Result<String, TransformError>) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                result,
            })
        }
    }

    #[async_trait]
    impl TextTransformer for Stub {
        async fn transform(&self, _text: &str) -> Result<String, TransformError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_empty_text_skips_transformer() {
        let stub = Stub::new(Ok("unused".to_string()));
        let processor = DeferredProcessor::new(stub.clone());

        let result = processor.process("").await;

        assert_eq!(result.text, NO_TEXT_MESSAGE);
        assert_eq!(result.source, DeferredSource::NoText);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_text_is_transformed() {
        let stub = Stub::new(Ok("cleaned".to_string()));
        let processor = DeferredProcessor::new(stub.clone());

        let result = processor.process("  ").await;

        assert_eq!(result.source, DeferredSource::Transformed);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transformed_text() {
        let stub = Stub::new(Ok("hey team. im out.".to_string()));
        let processor = DeferredProcessor::new(stub.clone());

        let result = processor.process("Hey Team. I am out of the office.").await;

        assert_eq!(result, DeferredResult::transformed("hey team. im out."));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejection_message_is_shown() {
        let stub = Stub::new(Err(TransformError::Rejected("Invalid key".to_string())));
        let result = DeferredProcessor::new(stub).process("hello").await;

        assert!(result.is_failure());
        assert_eq!(result.text, "Invalid key");
    }

    #[tokio::test]
    async fn test_unavailable_shows_unknown_error() {
        let stub = Stub::new(Err(TransformError::Unavailable("timeout".to_string())));
        let result = DeferredProcessor::new(stub).process("hello").await;

        assert!(result.is_failure());
        assert_eq!(result.text, UNKNOWN_ERROR_MESSAGE);
    }
}
