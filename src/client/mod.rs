//! High-level client combining the gateway with both caches.
//!
//! Endpoint families live in submodules (`applications`, `jobs`,
//! `interviews`, `dashboard`); this module owns construction, envelope
//! unwrapping, and the coarse invalidation policy every mutation funnels
//! through.

mod applications;
mod dashboard;
mod interviews;
mod jobs;

pub use dashboard::DashboardRefresh;

use serde_json::Value;

use crate::api::{AuthExpiredHook, Gateway, HttpTransport, Transport};
use crate::cache::{ResultCache, TtlStore};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::model::Pagination;
use crate::util::{json_get_any, json_str_any};

/// What: The RecruitWire data-layer client.
///
/// Details:
/// - Generic over [`Transport`] so tests inject scripted transports; the
///   default is the `reqwest`-backed [`HttpTransport`].
/// - Owns the keyed result cache and durable TTL store explicitly — there is
///   no module-global cache state, and dropping the client drops its caches.
pub struct Client<T: Transport = HttpTransport> {
    gateway: Gateway<T>,
    results: ResultCache,
    ttl: TtlStore,
    settings: Settings,
}

impl Client<HttpTransport> {
    /// Build a client with the production HTTP transport.
    ///
    /// # Errors
    /// Returns `Error::Transport` when the HTTP client cannot be built.
    pub fn new(settings: Settings) -> Result<Self> {
        let transport = HttpTransport::new(&settings)?;
        Ok(Self::with_transport(settings, transport))
    }
}

impl<T: Transport> Client<T> {
    /// Build a client around an externally supplied transport.
    pub fn with_transport(settings: Settings, transport: T) -> Self {
        let results = ResultCache::new(settings.result_cache_capacity);
        let ttl = TtlStore::new(settings.storage_dir.clone());
        Self {
            gateway: Gateway::new(transport),
            results,
            ttl,
            settings,
        }
    }

    /// Install the hook fired when the backend reports an expired session.
    pub fn set_auth_expired_hook(&mut self, hook: AuthExpiredHook) {
        self.gateway.set_auth_expired_hook(hook);
    }

    /// Active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// What: Drop every cached result page.
    ///
    /// Details:
    /// - The explicit external trigger behind "force refresh" and error
    ///   recovery; the next fetch for any descriptor hits the network.
    pub fn invalidate_all(&self) {
        self.results.invalidate_all();
    }

    /// Number of pages currently held by the keyed result cache.
    pub fn cached_pages(&self) -> usize {
        self.results.len()
    }
}

/// What: Unwrap the backend's `{success, data|<resource>, message?,
/// pagination?}` envelope.
///
/// Inputs:
/// - `v`: Decoded response body.
/// - `resource_keys`: Alternative payload keys some endpoints use instead of
///   `data` (e.g. `applications`, `job`).
/// - `fallback`: Message used when `success` is false and the envelope
///   carries no message.
///
/// Output:
/// - `(payload, pagination)` on success; `Error::Api` when `success` is
///   falsy, even though the HTTP transport succeeded.
pub(crate) fn unwrap_envelope(
    v: &Value,
    resource_keys: &[&str],
    fallback: &str,
) -> Result<(Value, Option<Pagination>)> {
    let success = v.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let msg = json_str_any(v, &["message", "error"])
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(Error::Api(msg));
    }
    let mut keys: Vec<&str> = vec!["data"];
    keys.extend_from_slice(resource_keys);
    let payload = json_get_any(v, &keys).cloned().unwrap_or(Value::Null);
    let pagination = v
        .get("pagination")
        .cloned()
        .and_then(|p| serde_json::from_value::<Pagination>(p).ok());
    Ok((payload, pagination))
}
