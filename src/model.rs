//! Core wire types shared across the endpoint modules.
//!
//! These mirror the backend's JSON resource shapes. Timestamps stay as the
//! backend's formatted strings; the data layer displays them, it does not
//! compute with them.

use serde::{Deserialize, Serialize};

/// Lifecycle states of a job application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Newly submitted, not yet looked at.
    Pending,
    /// An HR reviewer opened the application.
    Reviewed,
    /// Kept for the next round.
    Shortlisted,
    /// An interview slot has been booked.
    InterviewScheduled,
    /// Dropped from the process.
    Rejected,
    /// Offer accepted.
    Hired,
}

impl ApplicationStatus {
    /// Wire representation used in request bodies and query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Shortlisted => "shortlisted",
            Self::InterviewScheduled => "interview_scheduled",
            Self::Rejected => "rejected",
            Self::Hired => "hired",
        }
    }
}

/// A candidate's application to a job posting, as listed in the HR views.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Backend identifier.
    pub id: String,
    /// Job posting this application targets.
    pub job_id: String,
    /// Title of the job posting (denormalized for list display).
    #[serde(default)]
    pub job_title: String,
    /// Candidate display name.
    #[serde(default)]
    pub candidate_name: String,
    /// Candidate contact email.
    #[serde(default)]
    pub candidate_email: String,
    /// Current lifecycle state.
    pub status: ApplicationStatus,
    /// Submission timestamp as formatted by the backend.
    #[serde(default)]
    pub applied_at: String,
}

/// Lifecycle states of a job posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Visible to HR only.
    Draft,
    /// Published and accepting applications.
    Active,
    /// No longer accepting applications.
    Closed,
}

impl JobStatus {
    /// Wire representation used in request bodies and query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

/// A job posting summary as listed in HR and admin views.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Backend identifier.
    pub id: String,
    /// Posting title.
    pub title: String,
    /// Owning department.
    #[serde(default)]
    pub department: String,
    /// Office or "remote".
    #[serde(default)]
    pub location: String,
    /// Current lifecycle state.
    pub status: JobStatus,
    /// Number of applications received, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicants: Option<u64>,
    /// Creation timestamp as formatted by the backend.
    #[serde(default)]
    pub created_at: String,
}

/// Payload for creating or updating a job posting.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    /// Posting title.
    pub title: String,
    /// Owning department.
    pub department: String,
    /// Office or "remote".
    pub location: String,
    /// Full description shown to candidates.
    pub description: String,
}

/// A scheduled interview as shown in the dashboard and application views.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    /// Backend identifier.
    pub id: String,
    /// Application the interview belongs to.
    pub application_id: String,
    /// Candidate display name (denormalized).
    #[serde(default)]
    pub candidate_name: String,
    /// Job title (denormalized).
    #[serde(default)]
    pub job_title: String,
    /// Assigned interviewer display name.
    #[serde(default)]
    pub interviewer: String,
    /// Scheduled slot as formatted by the backend.
    #[serde(default)]
    pub scheduled_at: String,
}

/// Payload for scheduling an interview.
///
/// `scheduled_at` is a real timestamp here because the client validates it is
/// in the future before any network call.
#[derive(Clone, Debug)]
pub struct NewInterview {
    /// Application to schedule for.
    pub application_id: String,
    /// Interviewer account id.
    pub interviewer_id: String,
    /// Requested slot; must be in the future.
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    /// Meeting location or video link.
    pub location: String,
    /// Free-form note forwarded to the interviewer.
    pub notes: String,
}

/// Aggregate counters for the dashboard stats panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// All job postings, any state.
    #[serde(default)]
    pub total_jobs: u64,
    /// Postings currently accepting applications.
    #[serde(default)]
    pub active_jobs: u64,
    /// All applications, any state.
    #[serde(default)]
    pub total_applications: u64,
    /// Applications still awaiting review.
    #[serde(default)]
    pub pending_review: u64,
    /// Interviews scheduled in the current week.
    #[serde(default)]
    pub interviews_this_week: u64,
}

/// Paging metadata echoed by list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page the items belong to.
    pub current_page: u32,
    /// Total pages for the query.
    pub total_pages: u32,
    /// Total matching items across all pages.
    pub total_items: u64,
    /// Page size the backend applied.
    pub limit: u32,
}

/// One page of list results together with its paging metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultPage<T> {
    /// Items in backend order.
    pub items: Vec<T>,
    /// Paging metadata for the page.
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Status enums round-trip through their snake_case wire form.
    ///
    /// Inputs:
    /// - `interview_scheduled` JSON string.
    ///
    /// Output:
    /// - Deserializes to `InterviewScheduled`; `as_str` matches the wire form.
    fn application_status_wire_form() {
        let s: ApplicationStatus =
            serde_json::from_str("\"interview_scheduled\"").expect("parse status");
        assert_eq!(s, ApplicationStatus::InterviewScheduled);
        assert_eq!(s.as_str(), "interview_scheduled");
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::Shortlisted).expect("serialize"),
            "\"shortlisted\""
        );
    }

    #[test]
    /// What: Applications tolerate sparse backend objects.
    ///
    /// Inputs:
    /// - JSON with only `id`, `jobId`, and `status`.
    ///
    /// Output:
    /// - Optional display fields default to empty strings.
    fn application_defaults_for_missing_fields() {
        let a: Application = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "jobId": "j1",
            "status": "pending"
        }))
        .expect("parse application");
        assert_eq!(a.candidate_name, "");
        assert_eq!(a.applied_at, "");
        assert_eq!(a.status, ApplicationStatus::Pending);
    }
}
