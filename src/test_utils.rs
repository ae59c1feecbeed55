//! Test utilities for common test setup.
//!
//! Provides the scripted transport shared by unit tests across modules.

#[cfg(test)]
use std::collections::VecDeque;
#[cfg(test)]
use std::future::Future;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use crate::api::{ApiRequest, ApiResponse, Transport};
#[cfg(test)]
use crate::error::{Error, Result};

/// What: Scripted transport recording every dispatched request.
///
/// Details:
/// - Cloning shares the script queue and request log, so tests keep one
///   clone for scripting while the client owns the other.
/// - When the script queue is empty, responds with an empty success
///   envelope.
#[cfg(test)]
#[derive(Clone)]
pub struct MockTransport {
    log: Arc<Mutex<Vec<String>>>,
    replies: Arc<Mutex<VecDeque<Result<ApiResponse>>>>,
}

#[cfg(test)]
impl MockTransport {
    /// Fresh transport with an empty script.
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue a 200 response with the given body.
    pub fn push_body(&self, body: impl Into<String>) {
        if let Ok(mut q) = self.replies.lock() {
            q.push_back(Ok(ApiResponse {
                status: 200,
                body: body.into(),
            }));
        }
    }

    /// Queue an error outcome.
    pub fn push_error(&self, err: Error) {
        if let Ok(mut q) = self.replies.lock() {
            q.push_back(Err(err));
        }
    }

    /// Number of requests dispatched so far.
    pub fn calls(&self) -> usize {
        self.log.lock().map(|l| l.len()).unwrap_or(0)
    }

    /// `"METHOD /path?query"` lines in dispatch order.
    pub fn requests(&self) -> Vec<String> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Transport for MockTransport {
    fn send(&self, req: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send {
        if let Ok(mut l) = self.log.lock() {
            l.push(format!("{} {}", req.method, req.path));
        }
        let out = self
            .replies
            .lock()
            .ok()
            .and_then(|mut q| q.pop_front())
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 200,
                    body: "{\"success\":true,\"data\":[]}".to_string(),
                })
            });
        async move { out }
    }
}

/// Settings pointing storage at a fresh temp directory.
#[cfg(test)]
pub fn test_settings(dir: &std::path::Path) -> crate::config::Settings {
    crate::config::Settings {
        storage_dir: dir.to_path_buf(),
        ..crate::config::Settings::default()
    }
}
