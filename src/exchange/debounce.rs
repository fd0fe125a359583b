use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancellable debounce timer with "last call wins" semantics.
///
/// Scheduling a new commit supersedes the pending one. Pending commits
/// are aborted on cancel and on drop, so a buffered keystroke can never
/// land in a torn-down session.
pub(crate) struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `commit` to run once the quiet period elapses,
    /// superseding any previously scheduled commit.
    pub(crate) fn schedule<F>(&mut self, commit: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit();
        }));
    }

    /// Aborts the pending commit, if any.
    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
