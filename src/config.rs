//! Client settings and their on-disk TOML representation.
//!
//! Settings are loaded leniently: a missing file yields the defaults, and a
//! file that fails to parse is logged and ignored rather than aborting the
//! embedding application.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// What: Runtime configuration for the RecruitWire client.
///
/// Details:
/// - `base_url` is joined with the relative `/api/...` paths the endpoint
///   modules use; it must not end with a slash.
/// - `auth_token` is the bearer token supplied by the embedder; the data
///   layer never acquires or refreshes sessions itself.
/// - `storage_dir` hosts the durable TTL cache files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Origin of the backend REST API, e.g. `https://hr.example.com`.
    pub base_url: String,
    /// Bearer token attached to every request when present.
    pub auth_token: Option<String>,
    /// Directory for durable client-side cache files.
    pub storage_dir: PathBuf,
    /// Debounce window for free-text search, in milliseconds.
    pub search_debounce_ms: u64,
    /// Maximum number of result pages kept in the keyed result cache.
    pub result_cache_capacity: usize,
    /// Time-to-live for dashboard panel caches, in seconds.
    pub dashboard_ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4000".to_string(),
            auth_token: None,
            storage_dir: default_storage_dir(),
            search_debounce_ms: 300,
            result_cache_capacity: 32,
            dashboard_ttl_secs: 60,
        }
    }
}

impl Settings {
    /// What: Load settings from a TOML file, falling back to defaults.
    ///
    /// Inputs:
    /// - `path`: Location of the settings file.
    ///
    /// Output:
    /// - Parsed `Settings`, or the defaults when the file is missing or
    ///   malformed (malformed files are logged at warn level).
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read settings file");
                }
                return Self::default();
            }
        };
        match toml::from_str::<Self>(&raw) {
            Ok(s) => {
                tracing::info!(path = %path.display(), "loaded settings");
                s
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from the default config location, if any.
    pub fn load_default() -> Self {
        resolve_settings_path().map_or_else(Self::default, |p| Self::load(&p))
    }
}

/// Determine the settings file path, searching `$HOME/.config` then
/// `$XDG_CONFIG_HOME`.
pub(crate) fn resolve_settings_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join("recruitwire").join("client.toml"));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join("recruitwire").join("client.toml"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Default durable-cache directory: `$XDG_CACHE_HOME/recruitwire` or
/// `$HOME/.cache/recruitwire`, with the system temp dir as a last resort.
fn default_storage_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME")
        && !xdg.is_empty()
    {
        return Path::new(&xdg).join("recruitwire");
    }
    if let Ok(home) = env::var("HOME")
        && !home.is_empty()
    {
        return Path::new(&home).join(".cache").join("recruitwire");
    }
    env::temp_dir().join("recruitwire")
}
