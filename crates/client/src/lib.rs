//! `uniknow-client` — the HTTP request pipeline and per-resource API
//! modules of the UniKnow client.
//!
//! [`ApiClient`] owns the transport: it attaches the bearer token from the
//! session store, unwraps the `{code, message, data}` envelope, classifies
//! failures, surfaces them through the injected [`uniknow_core::Notifier`],
//! and requests the login redirect on an expired session. The resource
//! modules ([`cases`], [`search`], [`approvals`], [`operation`], [`qa`],
//! [`files`], [`auth`]) are thin: one method, one request.

pub mod approvals;
pub mod auth;
pub mod cases;
pub mod error;
pub mod files;
pub mod http;
pub mod operation;
pub mod qa;
pub mod search;

pub use error::{ApiError, ApiResult};
pub use http::{ApiClient, API_BASE_PATH, DEFAULT_TIMEOUT};
