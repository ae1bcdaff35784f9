//! Approval workflow endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use uniknow_core::{ApprovalId, CaseId, Page, UserId};

use crate::error::ApiResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// An approval record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApprovalRecord {
    pub id: ApprovalId,
    pub case_id: CaseId,
    pub approver_id: UserId,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Filters for the approval list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApprovalListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
struct ApprovalAction<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
struct ApprovalRequest<'a> {
    case_id: &'a CaseId,
}

/// Outcome of an approve/reject action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApprovalOutcome {
    pub id: ApprovalId,
    pub status: ApprovalStatus,
}

/// Reference to a newly created approval.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApprovalRef {
    pub id: ApprovalId,
}

/// `GET /approvals`, `POST /approvals[/{id}/approve|reject]`.
pub struct ApprovalApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn approvals(&self) -> ApprovalApi<'_> {
        ApprovalApi { client: self }
    }
}

impl ApprovalApi<'_> {
    pub async fn list(&self, query: &ApprovalListQuery) -> ApiResult<Page<ApprovalRecord>> {
        self.client.get_query("/approvals", query).await
    }

    /// Submit a case for approval.
    pub async fn request(&self, case_id: &CaseId) -> ApiResult<ApprovalRef> {
        self.client
            .post("/approvals", &ApprovalRequest { case_id })
            .await
    }

    pub async fn approve(
        &self,
        id: &ApprovalId,
        comment: Option<&str>,
    ) -> ApiResult<ApprovalOutcome> {
        self.client
            .post(&format!("/approvals/{id}/approve"), &ApprovalAction { comment })
            .await
    }

    pub async fn reject(
        &self,
        id: &ApprovalId,
        comment: Option<&str>,
    ) -> ApiResult<ApprovalOutcome> {
        self.client
            .post(&format!("/approvals/{id}/reject"), &ApprovalAction { comment })
            .await
    }
}
