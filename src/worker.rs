//! Background search worker.
//!
//! Receives [`QueryInput`]s from the view, coalesces debounced inputs so
//! only the latest survives a burst of keystrokes, fetches through the
//! client (and therefore through the keyed result cache), and reports
//! [`QueryResults`] tagged with the originating id. The view applies
//! results via [`crate::logic::handle_query_results`], which discards any
//! response that is no longer the latest.

use std::sync::Arc;

use tokio::{
    select,
    sync::mpsc,
    time::{Duration, sleep},
};

use crate::api::Transport;
use crate::client::Client;
use crate::state::{QueryInput, QueryResults};

/// What: Spawn the background worker driving application list fetches.
///
/// Inputs:
/// - `client`: Shared data-layer client the fetches go through.
/// - `query_rx`: Channel receiver for dispatched queries.
/// - `results_tx`: Channel sender for fetch outcomes.
///
/// Output:
/// - Join handle of the worker task; the worker exits when the query
///   channel closes.
///
/// Details:
/// - Debounced inputs wait out the configured window; any newer input
///   arriving within it replaces the pending one, so a keystroke burst
///   commits exactly one fetch with the final text.
/// - Non-debounced inputs (filter and page changes) fetch immediately.
/// - Each fetch runs in its own task so a slow response never blocks the
///   debounce loop; ordering is enforced by ids on the receiving side.
pub fn spawn_search_worker<T: Transport>(
    client: Arc<Client<T>>,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    results_tx: mpsc::UnboundedSender<QueryResults>,
) -> tokio::task::JoinHandle<()> {
    let debounce = Duration::from_millis(client.settings().search_debounce_ms);
    tokio::spawn(async move {
        loop {
            let Some(mut latest) = query_rx.recv().await else {
                break;
            };
            while latest.debounce {
                select! {
                    Some(newer) = query_rx.recv() => { latest = newer; }
                    () = sleep(debounce) => { break; }
                }
            }
            let client = Arc::clone(&client);
            let tx = results_tx.clone();
            tokio::spawn(async move {
                let QueryInput { id, descriptor, .. } = latest;
                tracing::debug!(id, "search worker fetching");
                let outcome = client
                    .fetch_applications(&descriptor)
                    .await
                    .map_err(|e| e.to_string());
                let _ = tx.send(QueryResults {
                    id,
                    descriptor,
                    outcome,
                });
            });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::query::RequestDescriptor;
    use crate::test_utils::MockTransport;

    fn query(id: u64, term: &str, debounce: bool) -> QueryInput {
        let mut descriptor = RequestDescriptor::default();
        descriptor
            .filters
            .insert("search".to_string(), term.to_string());
        QueryInput {
            id,
            descriptor,
            debounce,
        }
    }

    fn worker_fixture(
        debounce_ms: u64,
    ) -> (
        MockTransport,
        mpsc::UnboundedSender<QueryInput>,
        mpsc::UnboundedReceiver<QueryResults>,
        tempfile::TempDir,
    ) {
        let dir = tempfile::tempdir().expect("tempdir");
        let mock = MockTransport::new();
        let settings = Settings {
            storage_dir: dir.path().to_path_buf(),
            search_debounce_ms: debounce_ms,
            ..Settings::default()
        };
        let client = Arc::new(Client::with_transport(settings, mock.clone()));
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        spawn_search_worker(client, query_rx, results_tx);
        (mock, query_tx, results_rx, dir)
    }

    #[tokio::test]
    /// What: A burst of keystrokes coalesces to one fetch with the final
    /// term.
    ///
    /// Inputs:
    /// - Five debounced queries sent back-to-back within a 40ms window.
    ///
    /// Output:
    /// - Exactly one network call carrying `search=rust` and one result
    ///   with the last id.
    async fn debounce_coalesces_keystroke_burst() {
        let (mock, query_tx, mut results_rx, _dir) = worker_fixture(40);
        for (i, term) in ["r", "ru", "rus", "rust", "rust"].iter().enumerate() {
            query_tx
                .send(query(i as u64 + 1, term, true))
                .expect("send query");
        }
        let results = tokio::time::timeout(Duration::from_secs(2), results_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("one result");
        assert_eq!(results.id, 5);
        assert_eq!(mock.calls(), 1);
        let req = mock.requests().remove(0);
        assert!(req.contains("search=rust"), "unexpected request: {req}");
        assert!(
            results_rx.try_recv().is_err(),
            "burst must produce a single result"
        );
    }

    #[tokio::test]
    /// What: Non-debounced queries fetch without waiting out the window.
    ///
    /// Inputs:
    /// - One immediate query under a deliberately huge debounce setting.
    ///
    /// Output:
    /// - The result arrives long before the window could elapse.
    async fn immediate_queries_skip_debounce() {
        let (mock, query_tx, mut results_rx, _dir) = worker_fixture(60_000);
        query_tx.send(query(1, "", false)).expect("send query");
        let results = tokio::time::timeout(Duration::from_secs(2), results_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("result");
        assert_eq!(results.id, 1);
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    /// What: A fetch failure is reported as an error outcome, not silence.
    ///
    /// Inputs:
    /// - Scripted `success: false` envelope with a message.
    ///
    /// Output:
    /// - The result's outcome is `Err("Job not found")`.
    async fn fetch_failure_reports_message() {
        let (mock, query_tx, mut results_rx, _dir) = worker_fixture(10);
        mock.push_body("{\"success\":false,\"message\":\"Job not found\"}".to_string());
        query_tx.send(query(1, "", false)).expect("send query");
        let results = tokio::time::timeout(Duration::from_secs(2), results_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("result");
        assert_eq!(results.outcome.expect_err("must fail"), "Job not found");
    }
}
