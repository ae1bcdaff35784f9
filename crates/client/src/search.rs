//! Case search endpoints: agent-facing full search and the public
//! user-facing search over external cases only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cases::{Case, CaseType};
use crate::error::ApiResult;
use crate::http::ApiClient;

/// Agent search request (`POST /search/cases`).
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub page: u32,
    pub page_size: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category_id: None,
            case_type: None,
            tags: None,
            page: 1,
            page_size: 20,
        }
    }
}

/// A page of search hits, with optional facet buckets.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub items: Vec<Case>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub facets: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
struct UserSearchQuery<'a> {
    q: &'a str,
    page: u32,
    page_size: u32,
}

/// `POST /search/cases`, `GET /search/user`.
pub struct SearchApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi { client: self }
    }
}

impl SearchApi<'_> {
    /// Full-text search over all cases visible to the agent.
    pub async fn cases(&self, request: &SearchRequest) -> ApiResult<SearchPage> {
        self.client.post("/search/cases", request).await
    }

    /// End-user search; the backend restricts this to external cases.
    pub async fn user(&self, query: &str, page: u32, page_size: u32) -> ApiResult<SearchPage> {
        self.client
            .get_query(
                "/search/user",
                &UserSearchQuery {
                    q: query,
                    page,
                    page_size,
                },
            )
            .await
    }
}
