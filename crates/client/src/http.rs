//! The request pipeline.
//!
//! Outgoing: attach the bearer token from the session store (synchronous
//! read, never blocks on IO). Incoming: unwrap the response envelope,
//! classify failures, surface every failure through the notifier, and on
//! HTTP 401 invalidate the session and request a redirect to the login
//! route. The redirect is a no-op when the navigator already reports the
//! login route, so overlapping 401s cannot loop.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use uniknow_core::{Envelope, Notifier};
use uniknow_routing::{LOGIN_PATH, Navigator};
use uniknow_session::SessionStore;

use crate::error::{ApiError, ApiResult};

/// Prefix of every API endpoint.
pub const API_BASE_PATH: &str = "/api/v1";

/// Default per-request timeout; override with [`ApiClient::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const GENERIC_FAILURE: &str = "Request failed";
const SESSION_EXPIRED: &str = "Session expired, please log in again";

/// HTTP client wrapping every call to the UniKnow backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Client with the default 30 s timeout. `base_url` is the origin
    /// (`https://host[:port]`); the `/api/v1` prefix is appended here.
    pub fn new(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        Self::with_timeout(base_url, session, notifier, navigator, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            http,
            base_url,
            session,
            notifier,
            navigator,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_BASE_PATH, path)
    }

    // ── outgoing/incoming intercept points ──────────────────────────────

    /// Send a prepared request: bearer injection, transport/status
    /// classification, 401 side effects. Returns the raw response for
    /// 2xx statuses.
    async fn send_raw(&self, req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let token = self.session.token();
        let req = if token.is_empty() {
            req
        } else {
            req.bearer_auth(token)
        };

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!("transport failure: {err}");
                self.notifier.error(GENERIC_FAILURE);
                return Err(ApiError::Transport(err.to_string()));
            }
        };

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            self.notifier.error(SESSION_EXPIRED);
            // The original kept the stale token around until an explicit
            // logout; here an expired session invalidates it immediately.
            self.session.set_token("");
            self.redirect_to_login();
            return Err(ApiError::AuthExpired);
        }

        if !status.is_success() {
            let message = resp
                .json::<Envelope<Value>>()
                .await
                .ok()
                .map(|env| env.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_owned());
            self.notifier.error(&message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp)
    }

    /// Send and unwrap the envelope. Envelope code 200 is the sole success
    /// sentinel; anything else surfaces `message` and rejects.
    async fn dispatch(&self, req: reqwest::RequestBuilder) -> ApiResult<Envelope<Value>> {
        let resp = self.send_raw(req).await?;
        let envelope: Envelope<Value> = resp.json().await.map_err(|err| {
            self.notifier.error(GENERIC_FAILURE);
            ApiError::Decode(err.to_string())
        })?;

        if !envelope.is_success() {
            let message = if envelope.message.is_empty() {
                GENERIC_FAILURE
            } else {
                envelope.message.as_str()
            };
            self.notifier.error(message);
            return Err(ApiError::Application {
                code: envelope.code,
                message: envelope.message,
                data: envelope.data,
            });
        }

        Ok(envelope)
    }

    fn redirect_to_login(&self) {
        // No-op when already on the login route; overlapping expired
        // sessions must not stack navigations.
        if self.navigator.current_path() != LOGIN_PATH {
            self.navigator.navigate(LOGIN_PATH);
        }
    }

    fn decode<T: DeserializeOwned>(&self, envelope: Envelope<Value>) -> ApiResult<T> {
        let data = envelope.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|err| {
            self.notifier.error(GENERIC_FAILURE);
            ApiError::Decode(err.to_string())
        })
    }

    // ── helpers used by the resource modules ────────────────────────────

    /// GET returning the envelope's `data`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let env = self.dispatch(self.http.get(self.url(path))).await?;
        self.decode(env)
    }

    /// GET with a query string, returning the envelope's `data`.
    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let env = self
            .dispatch(self.http.get(self.url(path)).query(query))
            .await?;
        self.decode(env)
    }

    /// POST a JSON body, returning the envelope's `data`.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let env = self
            .dispatch(self.http.post(self.url(path)).json(body))
            .await?;
        self.decode(env)
    }

    /// POST a JSON body where the response payload is irrelevant.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(self.http.post(self.url(path)).json(body))
            .await?;
        Ok(())
    }

    /// PUT a JSON body, returning the envelope's `data`.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let env = self
            .dispatch(self.http.put(self.url(path)).json(body))
            .await?;
        self.decode(env)
    }

    /// DELETE where the response payload is irrelevant.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.dispatch(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// POST a multipart form, returning the envelope's `data`.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ApiResult<T> {
        let env = self
            .dispatch(self.http.post(self.url(path)).multipart(form))
            .await?;
        self.decode(env)
    }

    /// GET a binary body (file downloads bypass the envelope).
    pub(crate) async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        let resp = self.send_raw(self.http.get(self.url(path))).await?;
        let bytes = resp.bytes().await.map_err(|err| {
            self.notifier.error(GENERIC_FAILURE);
            ApiError::Transport(err.to_string())
        })?;
        Ok(bytes.to_vec())
    }
}
