//! Smart Q&A endpoint (graph-backed retrieval on the server side).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
}

/// Answer to a question, with the retrieved sources.
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Value>,
    #[serde(default)]
    pub graph_context: Option<Value>,
    #[serde(default)]
    pub confidence: f64,
}

/// `POST /graph/ask`.
pub struct QaApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn qa(&self) -> QaApi<'_> {
        QaApi { client: self }
    }
}

impl QaApi<'_> {
    /// Ask a question; pass the previous `session_id` to continue a
    /// conversation.
    pub async fn ask(&self, question: &str, session_id: Option<&str>) -> ApiResult<Answer> {
        self.client
            .post(
                "/graph/ask",
                &AskRequest {
                    question,
                    session_id,
                },
            )
            .await
    }
}
