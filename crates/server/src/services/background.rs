//! Background work that outlives the request that started it.
//!
//! Each task runs behind a panic boundary: a panic is logged and dropped, so
//! one failed command can never take down the process or another command.
//! Shutdown waits for in-flight tasks to finish.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio_util::task::TaskTracker;
use tracing::{Instrument, error};

/// Tracker for detached command pipelines.
#[derive(Debug, Clone, Default)]
pub struct BackgroundTasks {
    tracker: TaskTracker,
}

impl BackgroundTasks {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `future` in the background.
    ///
    /// The task inherits the current tracing span.
    pub fn spawn<F>(&self, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let guarded = async move {
            if let Err(panic) = AssertUnwindSafe(future).catch_unwind().await {
                let message = panic
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| panic.downcast_ref::<&str>().copied())
                    .unwrap_or("unknown panic");

                error!(task = name, error = message, "Background task panicked");
            }
        };

        self.tracker
            .spawn(guarded.instrument(tracing::Span::current()));
    }

    /// Number of tasks still running.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracker.len()
    }

    /// Whether no tasks are running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracker.is_empty()
    }

    /// Wait for every running task, then accept new ones again.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    /// Wait for every running task. Used once, after the server stops.
    pub async fn shutdown(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}
