//! Application list fetches, status mutations, and feedback retrieval.

use serde_json::Value;

use super::{Client, unwrap_envelope};
use crate::api::{ApiRequest, Transport};
use crate::error::{Error, Result};
use crate::feedback::{self, InterviewFeedback};
use crate::model::{Application, ApplicationStatus, Pagination, ResultPage};
use crate::query::RequestDescriptor;

impl<T: Transport> Client<T> {
    /// What: Fetch one page of applications for a descriptor.
    ///
    /// Inputs:
    /// - `descriptor`: Canonical query identity (page, limit, filters, sort).
    ///
    /// Output:
    /// - The result page, either from the keyed cache (when the descriptor
    ///   equals the immediately preceding fetch) or from the network.
    ///
    /// Details:
    /// - A successful network fetch stores the page under the canonical key
    ///   and moves the last-descriptor pointer.
    /// - On failure the cache is untouched and the error propagates; the
    ///   view layer clears its visible list in response.
    pub async fn fetch_applications(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<ResultPage<Application>> {
        let key = descriptor.cache_key();
        if let Some(page) = self.results.lookup_fast(&key) {
            return Ok(page);
        }
        let path = format!("/api/hr/applications?{}", descriptor.query_string());
        let v = self
            .gateway
            .request_json(ApiRequest::get(path))
            .await?
            .unwrap_or(Value::Null);
        let (payload, pagination) =
            unwrap_envelope(&v, &["applications"], "Failed to load applications")?;
        let items: Vec<Application> = if payload.is_null() {
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
        let page = ResultPage { items, pagination };
        self.results.store(&key, page.clone());
        Ok(page)
    }

    /// What: Move an application to a new lifecycle state.
    ///
    /// Inputs:
    /// - `id`: Application identifier.
    /// - `status`: Target state.
    ///
    /// Output:
    /// - `Ok(())` after the backend accepts the transition; the entire
    ///   result cache is dropped so any subsequent fetch hits the network.
    ///
    /// Details:
    /// - On failure nothing is invalidated and prior state stays intact.
    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<()> {
        let path = format!("/api/hr/applications/{id}/status");
        let body = serde_json::json!({ "status": status.as_str() });
        let v = self
            .gateway
            .request_json(ApiRequest::put(path, body))
            .await?
            .unwrap_or(Value::Null);
        unwrap_envelope(&v, &[], "Failed to update application status")?;
        tracing::info!(id, status = status.as_str(), "application status updated");
        self.results.invalidate_all();
        Ok(())
    }

    /// What: Load interviewer feedback for an application, if any exists.
    ///
    /// Output:
    /// - `Ok(Some(feedback))` for a recognized feedback shape, `Ok(None)`
    ///   for an empty body, an application-level failure, or an
    ///   unrecognized shape. Transport and auth errors still propagate.
    pub async fn fetch_interview_feedback(
        &self,
        application_id: &str,
    ) -> Result<Option<InterviewFeedback>> {
        let path = format!("/api/hr/applications/{application_id}/feedback");
        let v = match self.gateway.request_json(ApiRequest::get(path)).await? {
            Some(v) => v,
            None => return Ok(None),
        };
        match unwrap_envelope(&v, &["feedback"], "no feedback") {
            Ok((payload, _)) => Ok(feedback::normalize(&payload)),
            Err(Error::Api(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
