//! Job posting list, CRUD, and the admin bulk status operation.
//!
//! All mutations share the applications cache's invalidation policy: a
//! successful write drops every cached result page, because job changes can
//! reshape any application listing (titles, filter option sets, counts).

use serde_json::Value;

use super::{Client, unwrap_envelope};
use crate::api::{ApiRequest, Transport};
use crate::error::Result;
use crate::model::{Job, JobDraft, JobStatus, Pagination, ResultPage};
use crate::query::RequestDescriptor;

impl<T: Transport> Client<T> {
    /// What: Fetch one page of job postings.
    ///
    /// Inputs:
    /// - `descriptor`: Canonical query identity; inactive filters are absent
    ///   from the wire request.
    ///
    /// Output:
    /// - The page with its pagination metadata (synthesized when the
    ///   backend omits it).
    pub async fn fetch_jobs(&self, descriptor: &RequestDescriptor) -> Result<ResultPage<Job>> {
        let path = format!("/api/hr/jobs?{}", descriptor.query_string());
        let v = self
            .gateway
            .request_json(ApiRequest::get(path))
            .await?
            .unwrap_or(Value::Null);
        let (payload, pagination) = unwrap_envelope(&v, &["jobs"], "Failed to load jobs")?;
        let items: Vec<Job> = if payload.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(payload)?
        };
        let pagination = pagination.unwrap_or_else(|| Pagination {
            current_page: descriptor.page,
            total_pages: 1,
            total_items: items.len() as u64,
            limit: descriptor.limit,
        });
        Ok(ResultPage { items, pagination })
    }

    /// Create a job posting and invalidate cached pages.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<Job> {
        let body = serde_json::to_value(draft)?;
        let v = self
            .gateway
            .request_json(ApiRequest::post("/api/hr/jobs", body))
            .await?
            .unwrap_or(Value::Null);
        let (payload, _) = unwrap_envelope(&v, &["job"], "Failed to create job")?;
        let job: Job = serde_json::from_value(payload)?;
        tracing::info!(id = %job.id, title = %job.title, "job created");
        self.results.invalidate_all();
        Ok(job)
    }

    /// Update a job posting and invalidate cached pages.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn update_job(&self, id: &str, draft: &JobDraft) -> Result<Job> {
        let body = serde_json::to_value(draft)?;
        let v = self
            .gateway
            .request_json(ApiRequest::put(format!("/api/hr/jobs/{id}"), body))
            .await?
            .unwrap_or(Value::Null);
        let (payload, _) = unwrap_envelope(&v, &["job"], "Failed to update job")?;
        let job: Job = serde_json::from_value(payload)?;
        tracing::info!(id = %job.id, "job updated");
        self.results.invalidate_all();
        Ok(job)
    }

    /// Delete a job posting and invalidate cached pages.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn delete_job(&self, id: &str) -> Result<()> {
        let v = self
            .gateway
            .request_json(ApiRequest::delete(format!("/api/hr/jobs/{id}")))
            .await?
            .unwrap_or(Value::Null);
        unwrap_envelope(&v, &[], "Failed to delete job")?;
        tracing::info!(id, "job deleted");
        self.results.invalidate_all();
        Ok(())
    }

    /// What: Admin bulk status change for multiple postings.
    ///
    /// Inputs:
    /// - `job_ids`: Postings to update.
    /// - `status`: Target state applied to all of them.
    ///
    /// Output:
    /// - Number of postings the backend reports as updated (falls back to
    ///   the request count when the envelope omits it).
    pub async fn bulk_update_job_status(
        &self,
        job_ids: &[String],
        status: JobStatus,
    ) -> Result<u64> {
        let body = serde_json::json!({
            "jobIds": job_ids,
            "status": status.as_str(),
        });
        let v = self
            .gateway
            .request_json(ApiRequest::put("/api/admin/jobs/bulk/status", body))
            .await?
            .unwrap_or(Value::Null);
        let (payload, _) = unwrap_envelope(&v, &[], "Failed to update jobs")?;
        let updated = payload
            .get("updated")
            .and_then(Value::as_u64)
            .unwrap_or(job_ids.len() as u64);
        tracing::info!(updated, status = status.as_str(), "bulk job status applied");
        self.results.invalidate_all();
        Ok(updated)
    }
}
