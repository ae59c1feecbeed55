//! Applying search-worker results to the view state.

use crate::state::{HrState, QueryResults};

/// What: Apply a worker response to the applications pane.
///
/// Inputs:
/// - `state`: Mutable view state.
/// - `results`: Echoed id, descriptor, and fetch outcome.
///
/// Details:
/// - Responses whose id differs from `latest_query_id` are stale — a newer
///   query has been dispatched since — and are discarded wholesale.
/// - On success the echoed descriptor's page and search term are committed,
///   which also lowers the `is_searching` indicator.
/// - On failure the visible list is cleared: a failed fetch means "no
///   data", never "stale data".
pub fn handle_query_results(state: &mut HrState, results: QueryResults) {
    if results.id != state.latest_query_id {
        tracing::debug!(
            id = results.id,
            latest = state.latest_query_id,
            "discarding stale query results"
        );
        return;
    }
    state.filters.page = results.descriptor.page;
    if let Some(term) = results.descriptor.filters.get("search") {
        state.filters.search = term.clone();
    }
    state.pane.loading = false;
    match results.outcome {
        Ok(page) => {
            tracing::debug!(
                count = page.items.len(),
                page = page.pagination.current_page,
                "query results applied"
            );
            state.pane.items = page.items;
            state.pane.pagination = Some(page.pagination);
            state.pane.error = None;
        }
        Err(message) => {
            tracing::warn!(error = %message, "query failed, clearing pane");
            state.pane.items.clear();
            state.pane.pagination = None;
            state.pane.error = Some(message);
        }
    }
}
