//! Filter, sort, page, and search-input transitions.
//!
//! Each transition issues exactly one fetch effect: filter and sort changes
//! reset the page to 1 and dispatch immediately; page changes dispatch for
//! that page with filters untouched; search keystrokes dispatch through the
//! worker's debounce window and commit only when their results land.

use tokio::sync::mpsc;

use super::send_query;
use crate::state::{HrState, QueryInput};

/// What: Change the job filter.
///
/// Details:
/// - No-op when the value is unchanged (no duplicate fetch).
/// - Synchronously resets the tracked page to 1 before dispatching.
pub fn set_job_filter(
    state: &mut HrState,
    job: &str,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    if state.filters.job == job {
        return;
    }
    state.filters.job = job.to_string();
    state.filters.page = 1;
    let descriptor = state.filters.descriptor();
    send_query(state, query_tx, descriptor, false);
}

/// What: Change the status filter.
///
/// Details:
/// - Same reset-and-dispatch contract as [`set_job_filter`].
pub fn set_status_filter(
    state: &mut HrState,
    status: &str,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    if state.filters.status == status {
        return;
    }
    state.filters.status = status.to_string();
    state.filters.page = 1;
    let descriptor = state.filters.descriptor();
    send_query(state, query_tx, descriptor, false);
}

/// What: Sort on `field`, flipping direction when it is already active.
///
/// Details:
/// - Sort changes count as filter changes: page resets to 1 and exactly one
///   fetch is dispatched.
pub fn set_sort(state: &mut HrState, field: &str, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    if state.filters.sort_by == field {
        state.filters.sort_order = state.filters.sort_order.flipped();
    } else {
        state.filters.sort_by = field.to_string();
    }
    state.filters.page = 1;
    let descriptor = state.filters.descriptor();
    send_query(state, query_tx, descriptor, false);
}

/// What: Jump to `page` with filters unchanged.
///
/// Details:
/// - Clamped to 1; no-op when already on that page.
pub fn set_page(state: &mut HrState, page: u32, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let page = page.max(1);
    if state.filters.page == page {
        return;
    }
    state.filters.page = page;
    let descriptor = state.filters.descriptor();
    send_query(state, query_tx, descriptor, false);
}

/// What: Record a search keystroke and dispatch a debounced query.
///
/// Inputs:
/// - `text`: Current raw content of the search box.
///
/// Details:
/// - The committed term (`filters.search`) is untouched here; it updates
///   when the debounced results land, so `HrState::is_searching` stays true
///   in between.
/// - The dispatched descriptor targets page 1 with the pending term.
pub fn push_search_input(
    state: &mut HrState,
    text: &str,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    state.search_input = text.to_string();
    let mut pending = state.filters.clone();
    pending.search = text.trim().to_string();
    pending.page = 1;
    let descriptor = pending.descriptor();
    send_query(state, query_tx, descriptor, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> (
        mpsc::UnboundedSender<QueryInput>,
        mpsc::UnboundedReceiver<QueryInput>,
    ) {
        mpsc::unbounded_channel()
    }

    #[test]
    /// What: A filter change from page 3 resets the page synchronously and
    /// the dispatched fetch targets page 1.
    ///
    /// Inputs:
    /// - State on page 3; `set_status_filter("shortlisted")`.
    ///
    /// Output:
    /// - `filters.page == 1` immediately; exactly one queued query whose
    ///   descriptor has `page == 1`.
    fn filter_change_resets_page_and_fetches_once() {
        let (tx, mut rx) = channel();
        let mut state = HrState::default();
        state.filters.page = 3;
        set_status_filter(&mut state, "shortlisted", &tx);
        assert_eq!(state.filters.page, 1);
        let q = rx.try_recv().expect("one query queued");
        assert_eq!(q.descriptor.page, 1);
        assert!(!q.debounce);
        assert!(rx.try_recv().is_err(), "only one fetch effect may fire");
    }

    #[test]
    /// What: A page change leaves filters alone and fetches that page only.
    ///
    /// Inputs:
    /// - Status filter `pending`, then `set_page(4)`.
    ///
    /// Output:
    /// - One queued query with `page == 4` and the status filter intact.
    fn page_change_keeps_filters() {
        let (tx, mut rx) = channel();
        let mut state = HrState::default();
        state.filters.status = "pending".to_string();
        set_page(&mut state, 4, &tx);
        let q = rx.try_recv().expect("one query queued");
        assert_eq!(q.descriptor.page, 4);
        assert_eq!(
            q.descriptor.filters.get("status").map(String::as_str),
            Some("pending")
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Setting a filter to its current value is a no-op.
    ///
    /// Inputs:
    /// - `set_job_filter("all")` on default state.
    ///
    /// Output:
    /// - No queued query, page untouched.
    fn unchanged_filter_is_a_noop() {
        let (tx, mut rx) = channel();
        let mut state = HrState::default();
        set_job_filter(&mut state, "all", &tx);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.latest_query_id, 0);
    }

    #[test]
    /// What: Sorting the active field flips direction; a new field starts
    /// fresh.
    ///
    /// Inputs:
    /// - `set_sort("createdAt")` (active, desc), then `set_sort("name")`.
    ///
    /// Output:
    /// - First call flips to asc; second call switches the field.
    fn sort_toggles_and_switches() {
        let (tx, _rx) = channel();
        let mut state = HrState::default();
        set_sort(&mut state, "createdAt", &tx);
        assert_eq!(state.filters.sort_order, crate::query::SortOrder::Asc);
        set_sort(&mut state, "name", &tx);
        assert_eq!(state.filters.sort_by, "name");
    }

    #[test]
    /// What: Search keystrokes dispatch debounced page-1 queries without
    /// committing the term.
    ///
    /// Inputs:
    /// - State on page 2; `push_search_input("ada ")`.
    ///
    /// Output:
    /// - Committed term still empty, `is_searching` true, queued query has
    ///   the trimmed term and `page == 1`.
    fn search_input_dispatches_pending_term() {
        let (tx, mut rx) = channel();
        let mut state = HrState::default();
        state.filters.page = 2;
        push_search_input(&mut state, "ada ", &tx);
        assert_eq!(state.filters.search, "");
        assert!(state.is_searching());
        let q = rx.try_recv().expect("query queued");
        assert!(q.debounce);
        assert_eq!(q.descriptor.page, 1);
        assert_eq!(
            q.descriptor.filters.get("search").map(String::as_str),
            Some("ada")
        );
    }
}
