//! Query dispatch with monotonically increasing ids.

use tokio::sync::mpsc;

use crate::query::RequestDescriptor;
use crate::state::{HrState, QueryInput};

/// What: Send a descriptor over the search channel with a fresh id.
///
/// Inputs:
/// - `state`: Mutable view state; advances `next_query_id` and
///   `latest_query_id` and raises the pane's loading flag.
/// - `query_tx`: Channel to the search worker.
/// - `descriptor`: Query to fetch.
/// - `debounce`: Whether the worker should wait out the debounce window
///   first (free-text keystrokes) or fetch immediately.
///
/// Details:
/// - The id allows correlating responses so the view can discard stale
///   results; ids start at 1, leaving 0 as "nothing dispatched yet".
pub fn send_query(
    state: &mut HrState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    descriptor: RequestDescriptor,
    debounce: bool,
) {
    state.next_query_id += 1;
    let id = state.next_query_id;
    state.latest_query_id = id;
    state.pane.loading = true;
    let _ = query_tx.send(QueryInput {
        id,
        descriptor,
        debounce,
    });
}
