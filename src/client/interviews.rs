//! Interview scheduling.

use serde_json::Value;

use super::{Client, unwrap_envelope};
use crate::api::{ApiRequest, Transport};
use crate::error::{Error, Result};
use crate::model::{Interview, NewInterview};

impl<T: Transport> Client<T> {
    /// What: Book an interview slot for an application.
    ///
    /// Inputs:
    /// - `new`: Slot request; `scheduled_at` must lie in the future.
    ///
    /// Output:
    /// - The created interview. The backend also transitions the
    ///   application to `interview_scheduled`, so the result cache is
    ///   dropped on success.
    ///
    /// Details:
    /// - A past or present `scheduled_at` is rejected locally with
    ///   `Error::Invalid` before any network call.
    pub async fn schedule_interview(&self, new: &NewInterview) -> Result<Interview> {
        if new.scheduled_at <= chrono::Utc::now() {
            return Err(Error::Invalid(
                "interview must be scheduled in the future".to_string(),
            ));
        }
        let body = serde_json::json!({
            "applicationId": new.application_id,
            "interviewerId": new.interviewer_id,
            "scheduledAt": new.scheduled_at.to_rfc3339(),
            "location": new.location,
            "notes": new.notes,
        });
        let v = self
            .gateway
            .request_json(ApiRequest::post("/api/hr/interviews", body))
            .await?
            .unwrap_or(Value::Null);
        let (payload, _) = unwrap_envelope(&v, &["interview"], "Failed to schedule interview")?;
        let interview: Interview = serde_json::from_value(payload)?;
        tracing::info!(
            id = %interview.id,
            application_id = %interview.application_id,
            "interview scheduled"
        );
        self.results.invalidate_all();
        Ok(interview)
    }
}
