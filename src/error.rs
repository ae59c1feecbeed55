//! Crate-wide error type and result alias.
//!
//! The variants mirror the failure classes the data layer distinguishes:
//! the authentication sentinel, transport failures, body-decoding failures,
//! application-level envelope failures, and locally rejected inputs. Storage
//! problems in the durable TTL cache never surface here; they degrade to a
//! cache miss at the call site.

use thiserror::Error;

/// Errors produced by the RecruitWire data layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport reported that the session is no longer authenticated
    /// (HTTP 401). The gateway fires the auth-expiry hook and re-raises this
    /// sentinel unchanged; callers must not retry.
    #[error("authentication required")]
    AuthRequired,

    /// The request never produced a usable HTTP response (connection refused,
    /// DNS failure, broken body stream).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was present but not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The backend answered with `success: false`; the payload carries the
    /// backend-provided message when one was present.
    #[error("{0}")]
    Api(String),

    /// The request was rejected locally before any network call was made.
    #[error("invalid request: {0}")]
    Invalid(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
