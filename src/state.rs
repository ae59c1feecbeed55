//! View-facing state owned by the embedding UI.
//!
//! `HrState` is the single mutable struct the logic helpers operate on: the
//! filter values, the visible applications pane, the raw search input, and
//! the monotonic query-id pair used to discard stale search responses. The
//! dashboard panels use the small [`Panel`] state machine instead, because
//! their error semantics differ: a failed panel keeps showing previously
//! rendered data, while a failed list fetch clears the pane.

use std::collections::BTreeMap;

use crate::model::{Application, Pagination, ResultPage};
use crate::query::{FILTER_ALL, RequestDescriptor, SortOrder};

/// Filter, sort, and paging values behind the applications list view.
#[derive(Clone, Debug)]
pub struct FilterState {
    /// Job filter; the sentinel `"all"` means unfiltered.
    pub job: String,
    /// Status filter; the sentinel `"all"` means unfiltered.
    pub status: String,
    /// Committed free-text search term (post-debounce).
    pub search: String,
    /// Field the backend sorts on.
    pub sort_by: String,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// 1-based current page.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            job: FILTER_ALL.to_string(),
            status: FILTER_ALL.to_string(),
            search: String::new(),
            sort_by: "createdAt".to_string(),
            sort_order: SortOrder::Desc,
            page: 1,
            limit: 20,
        }
    }
}

impl FilterState {
    /// Canonical descriptor for the current filter values.
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut filters = BTreeMap::new();
        filters.insert("job".to_string(), self.job.clone());
        filters.insert("status".to_string(), self.status.clone());
        filters.insert("search".to_string(), self.search.trim().to_string());
        RequestDescriptor {
            page: self.page,
            limit: self.limit,
            filters,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        }
    }
}

/// The visible applications list and its request lifecycle flags.
#[derive(Debug, Default)]
pub struct ApplicationsPane {
    /// Items currently rendered.
    pub items: Vec<Application>,
    /// Paging metadata for the rendered page.
    pub pagination: Option<Pagination>,
    /// Whether a fetch for this pane is in flight.
    pub loading: bool,
    /// Banner message; a failed fetch sets this and clears `items`.
    pub error: Option<String>,
}

/// Root state for the applications list view.
#[derive(Debug, Default)]
pub struct HrState {
    /// Committed filter/sort/page values.
    pub filters: FilterState,
    /// The visible list pane.
    pub pane: ApplicationsPane,
    /// Raw search box content; differs from `filters.search` until the
    /// debounced commit lands.
    pub search_input: String,
    /// Next query id to hand out.
    pub next_query_id: u64,
    /// Id of the most recently dispatched query; responses with any other
    /// id are stale and discarded.
    pub latest_query_id: u64,
}

impl HrState {
    /// True while the typed search text has not been committed yet; the UI
    /// shows its "searching" indicator off this flag.
    pub fn is_searching(&self) -> bool {
        self.search_input.trim() != self.filters.search
    }
}

/// Search query dispatched to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Descriptor to fetch.
    pub descriptor: RequestDescriptor,
    /// Whether the worker should debounce before fetching (free-text
    /// keystrokes) or fetch immediately (filter and page changes).
    pub debounce: bool,
}

/// Results corresponding to a prior [`QueryInput`].
#[derive(Debug)]
pub struct QueryResults {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Echoed descriptor, committed into [`FilterState`] on apply.
    pub descriptor: RequestDescriptor,
    /// Page on success, user-facing message on failure.
    pub outcome: Result<ResultPage<Application>, String>,
}

/// Lifecycle phases of one dashboard panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Last fetch succeeded and `data` is current.
    Populated,
    /// Last fetch failed; `data` may still hold earlier content.
    Errored,
}

/// One dashboard panel's state machine.
///
/// Unlike the applications pane, a failing panel keeps whatever data it was
/// already showing; errors only replace the message, never the content.
#[derive(Debug, Default)]
pub struct Panel<T> {
    /// Current lifecycle phase.
    pub phase: PanelPhase,
    /// Most recently rendered content, surviving later errors.
    pub data: Option<T>,
    /// Message from the most recent failure.
    pub error: Option<String>,
}

impl<T> Panel<T> {
    /// Idle → Loading (also Errored → Loading on manual retry).
    pub fn begin_load(&mut self) {
        self.phase = PanelPhase::Loading;
        self.error = None;
    }

    /// Loading → Populated.
    pub fn resolve(&mut self, data: T) {
        self.phase = PanelPhase::Populated;
        self.data = Some(data);
        self.error = None;
    }

    /// Loading → Errored, keeping previously rendered data.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = PanelPhase::Errored;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The default filter state canonicalizes to a bare query.
    ///
    /// Inputs:
    /// - `FilterState::default()`.
    ///
    /// Output:
    /// - No active filters; page 1.
    fn default_filters_have_no_active_entries() {
        let d = FilterState::default().descriptor();
        assert_eq!(d.active_filters().count(), 0);
        assert_eq!(d.page, 1);
    }

    #[test]
    /// What: The searching indicator tracks input vs committed term.
    ///
    /// Inputs:
    /// - Raw input `"rust"` with an empty committed term, then a matching
    ///   committed term.
    ///
    /// Output:
    /// - `is_searching` true before the commit, false after.
    fn searching_indicator_follows_commit() {
        let mut state = HrState::default();
        state.search_input = "rust".to_string();
        assert!(state.is_searching());
        state.filters.search = "rust".to_string();
        assert!(!state.is_searching());
    }

    #[test]
    /// What: A panel keeps stale data through a failure.
    ///
    /// Inputs:
    /// - Resolve with data, then fail.
    ///
    /// Output:
    /// - Phase is Errored, error set, data still present.
    fn panel_failure_retains_data() {
        let mut panel: Panel<u32> = Panel::default();
        panel.begin_load();
        panel.resolve(7);
        panel.begin_load();
        panel.fail("upstream down");
        assert_eq!(panel.phase, PanelPhase::Errored);
        assert_eq!(panel.data, Some(7));
        assert_eq!(panel.error.as_deref(), Some("upstream down"));
    }

    #[test]
    /// What: Retry from Errored re-enters Loading and clears the message.
    ///
    /// Inputs:
    /// - A failed panel, then `begin_load`.
    ///
    /// Output:
    /// - Phase Loading with no error, data untouched.
    fn panel_retry_clears_error() {
        let mut panel: Panel<u32> = Panel::default();
        panel.resolve(1);
        panel.fail("x");
        panel.begin_load();
        assert_eq!(panel.phase, PanelPhase::Loading);
        assert!(panel.error.is_none());
        assert_eq!(panel.data, Some(1));
    }
}
