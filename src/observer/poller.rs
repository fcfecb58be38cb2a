//! # Poll Loop
//!
//! Repeating task that waits one interval, runs a cycle, and repeats until cancelled.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a spawned poll loop
///
/// The next wait only starts once the previous cycle has finished, so cycles
/// never overlap. Cancelling interrupts the wait, not a running cycle; a loop
/// spawned to replace a cancelled one waits for it to exit first.
#[derive(Debug)]
pub(crate) struct Poller {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the loop on the current tokio runtime
    ///
    /// When `previous` is given, its cycle in flight (if any) completes before
    /// the first wait of the new loop begins.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub(crate) fn spawn<F, Fut>(interval: Duration, previous: Option<Poller>, mut cycle: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let previous = previous.map(|poller| {
            poller.cancel();
            poller.handle
        });
        let handle = tokio::spawn(async move {
            if let Some(previous) = previous {
                tokio::select! {
                    () = cancelled.cancelled() => return,
                    _ = previous => {}
                }
            }
            loop {
                tokio::select! {
                    () = cancelled.cancelled() => break,
                    () = tokio::time::sleep(interval) => {}
                }
                cycle().await;
            }
        });
        Self { token, handle }
    }

    pub(crate) fn cancel(&self) {
        self.token.cancel();
    }

    pub(crate) fn is_active(&self) -> bool {
        !self.token.is_cancelled() && !self.handle.is_finished()
    }
}
