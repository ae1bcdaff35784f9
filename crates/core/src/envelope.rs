//! The backend response envelope.
//!
//! Every JSON response from the UniKnow API is wrapped as
//! `{ "code": <int>, "message": <string>, "data": <any> }`. `code == 200`
//! is the sole success sentinel, independent of the HTTP status line.

use serde::{Deserialize, Serialize};

/// Envelope code that marks a successful call.
pub const SUCCESS_CODE: i64 = 200;

/// Generic response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// A page of items, as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_pages: u32,
}
