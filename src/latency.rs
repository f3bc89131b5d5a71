//! Simulated latency for sign-in and save.
//!
//! A [`Pending`] is a value that becomes available after a delay unless it
//! is cancelled first. The UI polls it from its key loop with
//! [`Pending::try_take`] and drops or cancels it when the user backs out.

use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::error::Cancelled;

#[derive(Debug)]
pub struct Pending<T> {
    rx: oneshot::Receiver<T>,
    abort: AbortHandle,
}

/// Delivers `value` after `delay` on the given runtime.
pub fn simulate<T>(handle: &Handle, delay: Duration, value: T) -> Pending<T>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let (abort, registration) = AbortHandle::new_pair();

    let delivery = Abortable::new(
        async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the caller stopped waiting.
            let _ = tx.send(value);
        },
        registration,
    );
    handle.spawn(delivery);

    Pending { rx, abort }
}

impl<T> Pending<T> {
    /// `None` while still pending.
    pub fn try_take(&mut self) -> Option<Result<T, Cancelled>> {
        match self.rx.try_recv() {
            Ok(value) => Some(Ok(value)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(Cancelled)),
        }
    }

    pub fn cancel(&self) {
        tracing::debug!("cancelling simulated operation");
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }

    pub async fn wait(self) -> Result<T, Cancelled> {
        self.rx.await.map_err(|_| Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_after_delay() {
        let mut pending = simulate(&Handle::current(), Duration::from_millis(500), 7);
        assert!(pending.try_take().is_none());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(pending.try_take().is_none());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(pending.try_take(), Some(Ok(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_completion_reports_cancelled() {
        let mut pending = simulate(&Handle::current(), Duration::from_millis(1000), "login");
        pending.cancel();
        assert!(pending.is_cancelled());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(pending.try_take(), Some(Err(Cancelled)));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_resolves_value() {
        let pending = simulate(&Handle::current(), Duration::from_millis(10), 3u8);
        assert_eq!(pending.wait().await, Ok(3));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_after_cancel_errors() {
        let pending = simulate(&Handle::current(), Duration::from_millis(10), 3u8);
        pending.cancel();
        assert_eq!(pending.wait().await, Err(Cancelled));
    }
}
