//! Authentication endpoints.
//!
//! `login` only performs the request; persisting the returned token and
//! profile into the session store is the caller's move (the login view
//! does both, then navigates to the landing route).

use serde::{Deserialize, Serialize};

use uniknow_core::UserProfilePatch;

use crate::error::ApiResult;
use crate::http::ApiClient;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user_info: UserProfilePatch,
}

/// `POST /auth/login`, `POST /auth/logout`.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginData> {
        self.client.post("/auth/login", credentials).await
    }

    /// Server-side logout is a courtesy call; the token is stateless and
    /// local logout happens via `SessionStore::logout`.
    pub async fn logout(&self) -> ApiResult<()> {
        self.client.post_unit("/auth/logout", &serde_json::json!({})).await
    }
}
