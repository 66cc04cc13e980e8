//! Background tasks that feed results back into the action loop.
//!
//! Fetches run as one-shot tasks per [`FetchRequest`]; settled search
//! queries are forwarded from the debouncer until cancelled.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use accio_core::{DataService, FetchRequest, Intent};

use crate::action::Action;

/// Run `request` and deliver the result as `Intent::Loaded`, tagged with
/// the request's generation.
pub fn spawn_fetch(
    service: DataService,
    request: FetchRequest,
    action_tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        let result = service.fetch(request).await;
        debug!(
            generation = request.generation,
            ok = result.is_ok(),
            "fetch finished"
        );
        let _ = action_tx.send(Action::View(Intent::Loaded {
            generation: request.generation,
            result,
        }));
    });
}

/// Forward debounced search queries as [`Action::SearchSettled`].
pub fn spawn_search_bridge(
    mut settled_rx: mpsc::UnboundedReceiver<String>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;

                () = cancel.cancelled() => break,

                query = settled_rx.recv() => {
                    let Some(query) = query else { break };
                    if action_tx.send(Action::SearchSettled(query)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}
