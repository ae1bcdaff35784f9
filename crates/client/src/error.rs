//! Failure taxonomy of the request pipeline.

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a call through the pipeline can fail with.
///
/// Every variant has already been surfaced to the user by the time the
/// caller sees it; callers handle the rejection (abort the flow, leave a
/// form dirty, ...) but do not re-notify.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered HTTP 2xx but the envelope code was not 200.
    #[error("application error {code}: {message}")]
    Application {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// HTTP 401; the session has been invalidated and a login redirect
    /// requested.
    #[error("session expired")]
    AuthExpired,

    /// Any other non-2xx HTTP status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// No response at all (connect failure, timeout, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// Response body was not the expected envelope shape.
    #[error("malformed response: {0}")]
    Decode(String),
}
