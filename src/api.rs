//! HTTP request gateway and the transport seam beneath it.
//!
//! The gateway owns exactly one behavior beyond delegation: when the
//! transport signals the authentication sentinel, it fires the embedder's
//! auth-expiry hook (the "redirect to login" side effect) and re-raises the
//! error. Everything else — including application-level envelope failures —
//! is the caller's concern. One attempt per call: no retry, no timeout, no
//! backoff.

use std::future::Future;

use serde_json::Value;

use crate::config::Settings;
use crate::error::{Error, Result};

/// A single outbound API call.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: reqwest::Method,
    /// Path relative to the configured base URL, including any query string.
    pub path: String,
    /// JSON body for write methods.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: reqwest::Method::GET,
            path: path.into(),
            body: None,
        }
    }

    /// POST request with a JSON body.
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: reqwest::Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    /// PUT request with a JSON body.
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: reqwest::Method::PUT,
            path: path.into(),
            body: Some(body),
        }
    }

    /// DELETE request for `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: reqwest::Method::DELETE,
            path: path.into(),
            body: None,
        }
    }
}

/// Raw transport response before any JSON handling.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body text, possibly empty.
    pub body: String,
}

/// What: The authenticated transport seam.
///
/// Details:
/// - Implementations attach credentials and perform exactly one attempt.
/// - An unauthenticated session must surface as `Error::AuthRequired`; the
///   gateway treats that variant as the sentinel.
/// - Test doubles implement this to count and script network calls.
pub trait Transport: Send + Sync + 'static {
    /// Perform one HTTP call.
    fn send(&self, req: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// What: Build the production transport from settings.
    ///
    /// Inputs:
    /// - `settings`: Source of the base URL and optional bearer token.
    ///
    /// Output:
    /// - Transport ready for use, or `Error::Transport` when the underlying
    ///   client cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.auth_token.clone(),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, req: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send {
        let url = format!("{}{}", self.base_url, req.path);
        let mut builder = self.http.request(req.method.clone(), url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        async move {
            tracing::debug!(method = %req.method, path = %req.path, "dispatching request");
            let resp = builder.send().await?;
            let status = resp.status().as_u16();
            if status == 401 {
                tracing::debug!(path = %req.path, "transport reported expired session");
                return Err(Error::AuthRequired);
            }
            let body = resp.text().await?;
            Ok(ApiResponse { status, body })
        }
    }
}

/// Hook invoked when the transport reports an expired session.
pub type AuthExpiredHook = Box<dyn Fn() + Send + Sync>;

/// What: Request gateway wrapping a [`Transport`].
///
/// Details:
/// - `request` returns the raw response; `request_json` additionally decodes
///   the body, mapping an empty body to `Ok(None)`.
/// - On `Error::AuthRequired` the gateway fires the auth-expiry hook before
///   propagating; it never swallows the error.
pub struct Gateway<T: Transport> {
    transport: T,
    on_auth_expired: Option<AuthExpiredHook>,
}

impl<T: Transport> Gateway<T> {
    /// Wrap a transport with no auth-expiry hook installed.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            on_auth_expired: None,
        }
    }

    /// Install the hook fired when the session has expired.
    pub fn set_auth_expired_hook(&mut self, hook: AuthExpiredHook) {
        self.on_auth_expired = Some(hook);
    }

    /// What: Perform one call and return the raw response.
    ///
    /// Output:
    /// - The transport's response; on the auth sentinel, fires the hook and
    ///   re-raises. All other errors pass through unchanged.
    pub async fn request(&self, req: ApiRequest) -> Result<ApiResponse> {
        match self.transport.send(req).await {
            Err(Error::AuthRequired) => {
                if let Some(hook) = &self.on_auth_expired {
                    hook();
                }
                Err(Error::AuthRequired)
            }
            other => other,
        }
    }

    /// What: Perform one call and decode the JSON body.
    ///
    /// Output:
    /// - `Ok(None)` when the body is empty, the parsed value otherwise;
    ///   a parse failure is `Error::Decode`.
    pub async fn request_json(&self, req: ApiRequest) -> Result<Option<Value>> {
        let resp = self.request(req).await?;
        if resp.body.trim().is_empty() {
            return Ok(None);
        }
        let v: Value = serde_json::from_str(&resp.body)?;
        Ok(Some(v))
    }
}
