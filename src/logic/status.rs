//! Optimistic in-memory patches after successful mutations.
//!
//! The client has already dropped the result cache by the time these run;
//! patching the visible entry gives immediate feedback while the next fetch
//! is forced to the network anyway.

use crate::model::ApplicationStatus;
use crate::state::HrState;

/// What: Patch the visible list entry for `id` to `status`.
///
/// Output:
/// - `true` when an entry was patched; `false` when `id` is not on the
///   current page (nothing to patch, nothing lost).
pub fn apply_status_update(state: &mut HrState, id: &str, status: ApplicationStatus) -> bool {
    if let Some(app) = state.pane.items.iter_mut().find(|a| a.id == id) {
        app.status = status;
        tracing::debug!(id, status = status.as_str(), "optimistic status patch");
        return true;
    }
    false
}

/// Patch the visible entry for a freshly scheduled interview.
pub fn apply_interview_scheduled(state: &mut HrState, application_id: &str) -> bool {
    apply_status_update(state, application_id, ApplicationStatus::InterviewScheduled)
}
