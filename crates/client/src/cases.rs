//! Case management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use uniknow_core::{CaseId, Page, TenantId, UserId};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Visibility of a case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    Internal,
    #[default]
    External,
}

/// A case as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub tenant_id: TenantId,
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub case_type: CaseType,
    /// Lifecycle status (`draft`, `pending_approval`, `approved`,
    /// `rejected`, `published`, `archived`).
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub dislike_count: u64,
    pub creator_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Payload for creating a case.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaseDraft {
    pub title: String,
    pub content: String,
    pub category_id: String,
    pub case_type: CaseType,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Partial update; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Filters for the case list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaseListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Reference to a case touched by a write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaseRef {
    pub id: CaseId,
}

/// `GET|POST|PUT|DELETE /cases`.
pub struct CaseApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn cases(&self) -> CaseApi<'_> {
        CaseApi { client: self }
    }
}

impl CaseApi<'_> {
    pub async fn list(&self, query: &CaseListQuery) -> ApiResult<Page<Case>> {
        self.client.get_query("/cases", query).await
    }

    pub async fn get(&self, id: &CaseId) -> ApiResult<Case> {
        self.client.get(&format!("/cases/{id}")).await
    }

    pub async fn create(&self, draft: &CaseDraft) -> ApiResult<CaseRef> {
        self.client.post("/cases", draft).await
    }

    pub async fn update(&self, id: &CaseId, update: &CaseUpdate) -> ApiResult<CaseRef> {
        self.client.put(&format!("/cases/{id}"), update).await
    }

    pub async fn delete(&self, id: &CaseId) -> ApiResult<()> {
        self.client.delete(&format!("/cases/{id}")).await
    }
}
