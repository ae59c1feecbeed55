//! Durable TTL cache for small JSON payloads.
//!
//! The dashboard panels use this store to paint stale-but-fast content while
//! the live request is in flight. Records persist as
//! `{value, expires_at}` JSON files under a namespaced name in the storage
//! directory. Reads past the expiry evict the record lazily and report a
//! miss. Every storage or serialization failure degrades to a miss; this
//! store is a latency hint, never a correctness guarantee.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// File-name prefix separating this crate's records from anything else in
/// the storage directory.
const NAMESPACE: &str = "recruitwire";

#[derive(serde::Serialize, serde::Deserialize)]
struct TtlRecord {
    value: Value,
    /// Unix milliseconds after which the record is stale.
    expires_at: i64,
}

/// Durable key/value store with per-record expiry.
pub struct TtlStore {
    dir: PathBuf,
}

impl TtlStore {
    /// What: Open (and best-effort create) the storage directory.
    ///
    /// Inputs:
    /// - `dir`: Directory that will hold the record files.
    ///
    /// Output:
    /// - A store rooted at `dir`; creation failure is logged and later
    ///   reads/writes simply miss.
    pub fn new(dir: PathBuf) -> Self {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "could not create ttl cache dir");
        }
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{NAMESPACE}.{safe}.json"))
    }

    /// What: Persist `value` under `key` with a time-to-live.
    ///
    /// Inputs:
    /// - `key`: Logical record name (namespaced on disk).
    /// - `value`: Any serializable payload.
    /// - `ttl_secs`: Lifetime from now.
    ///
    /// Details:
    /// - Overwrites any previous record for `key`; failures are logged and
    ///   swallowed.
    pub fn set<T: Serialize>(&self, key: &str, value: &T, ttl_secs: u64) {
        self.set_at(key, value, ttl_secs, chrono::Utc::now().timestamp_millis());
    }

    /// What: Read the value stored under `key`, if still fresh.
    ///
    /// Output:
    /// - `Some(value)` while `expires_at` lies in the future; `None` on
    ///   expiry (the record is evicted), on any storage failure, or when the
    ///   payload no longer deserializes into `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, chrono::Utc::now().timestamp_millis())
    }

    fn set_at<T: Serialize>(&self, key: &str, value: &T, ttl_secs: u64, now_ms: i64) {
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "ttl cache serialize failed");
                return;
            }
        };
        let record = TtlRecord {
            value,
            expires_at: now_ms.saturating_add((ttl_secs as i64).saturating_mul(1000)),
        };
        let path = self.path_for(key);
        match serde_json::to_string(&record) {
            Ok(s) => {
                if let Err(e) = std::fs::write(&path, s) {
                    tracing::warn!(key, path = %path.display(), error = %e, "ttl cache write failed");
                } else {
                    tracing::trace!(key, ttl_secs, "ttl cache record written");
                }
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "ttl cache encode failed");
            }
        }
    }

    fn get_at<T: DeserializeOwned>(&self, key: &str, now_ms: i64) -> Option<T> {
        let path = self.path_for(key);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(key, path = %path.display(), error = %e, "ttl cache read failed");
                }
                return None;
            }
        };
        let record: TtlRecord = match serde_json::from_str(&raw) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(key, error = %e, "ttl cache record corrupt, treating as miss");
                return None;
            }
        };
        if record.expires_at <= now_ms {
            tracing::debug!(key, "ttl cache record expired, evicting");
            let _ = std::fs::remove_file(&path);
            return None;
        }
        match serde_json::from_value(record.value) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(key, error = %e, "ttl cache payload shape mismatch");
                None
            }
        }
    }

    /// Directory the store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
