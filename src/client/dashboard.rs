//! Dashboard aggregate fetches with durable TTL caching.
//!
//! Each panel is an independent logical fetch. Callers paint the cached
//! value immediately (`cached_*`), always issue the live request, and the
//! store is overwritten on success — the displayed value may be stale for up
//! to the TTL window and the UI tolerates that.

use serde_json::Value;

use super::{Client, unwrap_envelope};
use crate::api::{ApiRequest, Transport};
use crate::error::Result;
use crate::model::{Application, DashboardStats, Interview, Job};

const KEY_STATS: &str = "dashboard.stats";
const KEY_RECENT_JOBS: &str = "dashboard.recent_jobs";
const KEY_RECENT_APPLICATIONS: &str = "dashboard.recent_applications";
const KEY_UPCOMING_INTERVIEWS: &str = "dashboard.upcoming_interviews";

/// Outcome of refreshing all four dashboard panels; each panel fails or
/// succeeds on its own.
pub struct DashboardRefresh {
    /// Aggregate counters.
    pub stats: Result<DashboardStats>,
    /// Most recently created postings.
    pub recent_jobs: Result<Vec<Job>>,
    /// Most recently submitted applications.
    pub recent_applications: Result<Vec<Application>>,
    /// Interviews coming up, soonest first.
    pub upcoming_interviews: Result<Vec<Interview>>,
}

impl<T: Transport> Client<T> {
    async fn fetch_dashboard_value(&self, segment: &str, fallback: &str) -> Result<Value> {
        let v = self
            .gateway
            .request_json(ApiRequest::get(format!("/api/hr/dashboard/{segment}")))
            .await?
            .unwrap_or(Value::Null);
        let (payload, _) = unwrap_envelope(&v, &[], fallback)?;
        Ok(payload)
    }

    /// Fetch live dashboard stats and overwrite the TTL record.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats> {
        let payload = self
            .fetch_dashboard_value("stats", "Failed to load dashboard stats")
            .await?;
        let stats: DashboardStats = serde_json::from_value(payload)?;
        self.ttl
            .set(KEY_STATS, &stats, self.settings.dashboard_ttl_secs);
        Ok(stats)
    }

    /// Last successfully fetched stats, if still within their TTL.
    pub fn cached_dashboard_stats(&self) -> Option<DashboardStats> {
        self.ttl.get(KEY_STATS)
    }

    /// Fetch the recent-jobs panel and overwrite the TTL record.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn fetch_recent_jobs(&self) -> Result<Vec<Job>> {
        let payload = self
            .fetch_dashboard_value("recent-jobs", "Failed to load recent jobs")
            .await?;
        let jobs: Vec<Job> = if payload.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(payload)?
        };
        self.ttl
            .set(KEY_RECENT_JOBS, &jobs, self.settings.dashboard_ttl_secs);
        Ok(jobs)
    }

    /// Last successfully fetched recent jobs, if still within their TTL.
    pub fn cached_recent_jobs(&self) -> Option<Vec<Job>> {
        self.ttl.get(KEY_RECENT_JOBS)
    }

    /// Fetch the recent-applications panel and overwrite the TTL record.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn fetch_recent_applications(&self) -> Result<Vec<Application>> {
        let payload = self
            .fetch_dashboard_value("recent-applications", "Failed to load recent applications")
            .await?;
        let apps: Vec<Application> = if payload.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(payload)?
        };
        self.ttl.set(
            KEY_RECENT_APPLICATIONS,
            &apps,
            self.settings.dashboard_ttl_secs,
        );
        Ok(apps)
    }

    /// Last successfully fetched recent applications, if still fresh.
    pub fn cached_recent_applications(&self) -> Option<Vec<Application>> {
        self.ttl.get(KEY_RECENT_APPLICATIONS)
    }

    /// Fetch the upcoming-interviews panel and overwrite the TTL record.
    ///
    /// # Errors
    /// Propagates transport, decode, and envelope failures unchanged.
    pub async fn fetch_upcoming_interviews(&self) -> Result<Vec<Interview>> {
        let payload = self
            .fetch_dashboard_value("upcoming-interviews", "Failed to load upcoming interviews")
            .await?;
        let interviews: Vec<Interview> = if payload.is_null() {
            Vec::new()
        } else {
            serde_json::from_value(payload)?
        };
        self.ttl.set(
            KEY_UPCOMING_INTERVIEWS,
            &interviews,
            self.settings.dashboard_ttl_secs,
        );
        Ok(interviews)
    }

    /// Last successfully fetched upcoming interviews, if still fresh.
    pub fn cached_upcoming_interviews(&self) -> Option<Vec<Interview>> {
        self.ttl.get(KEY_UPCOMING_INTERVIEWS)
    }

    /// What: Refresh all four panels concurrently.
    ///
    /// Output:
    /// - Per-panel results; one panel failing never blocks the others.
    pub async fn refresh_dashboard(&self) -> DashboardRefresh {
        let (stats, recent_jobs, recent_applications, upcoming_interviews) =
            futures::future::join4(
                self.fetch_dashboard_stats(),
                self.fetch_recent_jobs(),
                self.fetch_recent_applications(),
                self.fetch_upcoming_interviews(),
            )
            .await;
        DashboardRefresh {
            stats,
            recent_jobs,
            recent_applications,
            upcoming_interviews,
        }
    }
}
