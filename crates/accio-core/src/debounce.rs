//! Search-input debouncing.
//!
//! Keystrokes are pushed into a [`SearchDebouncer`]; a background task
//! forwards only the latest value once input has been quiet for the
//! configured delay. Dropping the debouncer flushes any pending value,
//! cancelling the token discards it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default quiet period before a search is issued.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Handle for feeding raw search input to the debounce task.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    tx: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    /// Spawn the debounce task. Settled queries are sent on `out`.
    pub fn spawn(
        delay: Duration,
        out: mpsc::UnboundedSender<String>,
        cancel: CancellationToken,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(debounce_task(delay, rx, out, cancel));
        Self { tx }
    }

    /// Record the current contents of the search box.
    pub fn push(&self, query: impl Into<String>) {
        let _ = self.tx.send(query.into());
    }
}

async fn debounce_task(
    delay: Duration,
    mut rx: mpsc::UnboundedReceiver<String>,
    out: mpsc::UnboundedSender<String>,
    cancel: CancellationToken,
) {
    let mut pending: Option<String> = None;
    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            msg = rx.recv() => {
                let Some(query) = msg else {
                    if let Some(query) = pending.take() {
                        let _ = out.send(query);
                    }
                    break;
                };
                pending = Some(query);
                sleep.as_mut().reset(Instant::now() + delay);
            }

            () = &mut sleep, if pending.is_some() => {
                if let Some(query) = pending.take() {
                    debug!(query = %query, "search settled");
                    if out.send(query).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    fn debouncer() -> (
        SearchDebouncer,
        mpsc::UnboundedReceiver<String>,
        CancellationToken,
    ) {
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let debouncer = SearchDebouncer::spawn(DEFAULT_SEARCH_DEBOUNCE, out_tx, cancel.clone());
        (debouncer, out_rx, cancel)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_input_emits_only_latest_value() {
        let (debouncer, mut out, _cancel) = debouncer();

        debouncer.push("h");
        sleep(Duration::from_millis(40)).await;
        debouncer.push("ha");
        sleep(Duration::from_millis(40)).await;
        debouncer.push("harry");

        let start = Instant::now();
        assert_eq!(out.recv().await.unwrap(), "harry");
        assert!(start.elapsed() >= DEFAULT_SEARCH_DEBOUNCE);

        // Nothing else follows.
        assert!(timeout(Duration::from_secs(1), out.recv()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_bursts_emit_separately() {
        let (debouncer, mut out, _cancel) = debouncer();

        debouncer.push("lumos");
        assert_eq!(out.recv().await.unwrap(), "lumos");

        debouncer.push("nox");
        assert_eq!(out.recv().await.unwrap(), "nox");
    }

    #[tokio::test(start_paused = true)]
    async fn drop_flushes_pending_query() {
        let (debouncer, mut out, _cancel) = debouncer();

        debouncer.push("accio");
        drop(debouncer);

        let start = Instant::now();
        assert_eq!(out.recv().await.unwrap(), "accio");
        assert!(start.elapsed() < DEFAULT_SEARCH_DEBOUNCE);
        assert!(out.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_query() {
        let (debouncer, mut out, cancel) = debouncer();

        debouncer.push("expelliarmus");
        cancel.cancel();

        assert!(out.recv().await.is_none());
    }
}
