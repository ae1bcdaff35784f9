//! Operations dashboard endpoints: usage statistics and the audit log.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use uniknow_core::Page;

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Case corpus statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CaseStats {
    #[serde(default)]
    pub total_cases: u64,
    #[serde(default)]
    pub internal_cases: u64,
    #[serde(default)]
    pub external_cases: u64,
    #[serde(default)]
    pub pending_approval: u64,
    #[serde(default)]
    pub today_views: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

/// Q&A usage statistics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QaStats {
    #[serde(default)]
    pub total_questions: u64,
    #[serde(default)]
    pub answered: u64,
    #[serde(default)]
    pub ai_resolved: u64,
    #[serde(default)]
    pub ai_resolution_rate: f64,
    #[serde(default)]
    pub avg_response_time: f64,
}

#[derive(Debug, Clone, Serialize)]
struct LogQuery {
    page: u32,
    page_size: u32,
}

/// `GET /operation/stats/*`, `GET /operation/logs`.
pub struct OperationApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn operation(&self) -> OperationApi<'_> {
        OperationApi { client: self }
    }
}

impl OperationApi<'_> {
    pub async fn case_stats(&self) -> ApiResult<CaseStats> {
        self.client.get("/operation/stats/case").await
    }

    pub async fn qa_stats(&self) -> ApiResult<QaStats> {
        self.client.get("/operation/stats/qa").await
    }

    /// Operation log entries are schemaless on this backend; callers get
    /// the raw JSON objects.
    pub async fn logs(&self, page: u32, page_size: u32) -> ApiResult<Page<Value>> {
        self.client
            .get_query("/operation/logs", &LogQuery { page, page_size })
            .await
    }
}
