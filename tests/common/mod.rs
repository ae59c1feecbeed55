//! Shared helpers for the integration suite.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use recruitwire::api::{ApiRequest, ApiResponse, Transport};
use recruitwire::{Error, Result, Settings};

/// Scripted transport: pops canned outcomes in FIFO order and records every
/// dispatched request line. Clones share the script and the log.
#[derive(Clone)]
pub struct MockTransport {
    log: Arc<Mutex<Vec<String>>>,
    replies: Arc<Mutex<VecDeque<Result<ApiResponse>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            replies: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn push_body(&self, body: impl Into<String>) {
        if let Ok(mut q) = self.replies.lock() {
            q.push_back(Ok(ApiResponse {
                status: 200,
                body: body.into(),
            }));
        }
    }

    #[allow(dead_code)]
    pub fn push_error(&self, err: Error) {
        if let Ok(mut q) = self.replies.lock() {
            q.push_back(Err(err));
        }
    }

    pub fn calls(&self) -> usize {
        self.log.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn requests(&self) -> Vec<String> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

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

/// Settings with durable storage pointed at a fresh temp directory.
pub fn settings_in(dir: &std::path::Path) -> Settings {
    Settings {
        storage_dir: dir.to_path_buf(),
        ..Settings::default()
    }
}

/// Success envelope holding one page of applications.
pub fn applications_body(names: &[&str], total_pages: u32) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            serde_json::json!({
                "id": format!("a{i}"),
                "jobId": "j1",
                "candidateName": n,
                "status": "pending"
            })
        })
        .collect();
    serde_json::json!({
        "success": true,
        "applications": items,
        "pagination": {
            "currentPage": 1,
            "totalPages": total_pages,
            "totalItems": names.len(),
            "limit": 20
        }
    })
    .to_string()
}
