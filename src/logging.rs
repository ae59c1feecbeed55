//! File-logging bootstrap for embedding applications.
//!
//! The data layer itself only emits `tracing` events; this module offers the
//! subscriber setup an embedding binary or test harness can call once at
//! startup. Log lines are written through a non-blocking appender so a slow
//! disk never stalls the UI thread.

use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use std::time::SystemTime;

/// Timestamp formatter producing `YYYY-MM-DD-THH:MM:SS` in UTC.
struct WireTimer;

impl tracing_subscriber::fmt::time::FormatTime for WireTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(_) => 0,
        };
        let s = crate::util::ts_to_date(Some(secs));
        let ts = s.replacen(' ', "-T", 1);
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize file logging with an env-filterable subscriber.
///
/// Inputs:
/// - `log_path`: File the appender writes to (created/appended).
///
/// Output:
/// - `true` when the file subscriber was installed; `false` when the file
///   could not be opened or a subscriber was already set, in which case a
///   stderr fallback is attempted.
///
/// Details:
/// - Filter defaults to `info` and honors `RUST_LOG`.
/// - The non-blocking worker guard is parked in a `OnceLock` so the appender
///   keeps flushing for the process lifetime.
pub fn init_file_logging(log_path: &Path) -> bool {
    if let Some(dir) = log_path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let installed = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(WireTimer)
                .try_init()
                .is_ok();
            if installed {
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            installed
        }
        Err(e) => {
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .try_init();
            tracing::warn!(path = %log_path.display(), error = %e, "file logging unavailable, using stderr");
            false
        }
    }
}
