//! HTTP adapter for the backend REST API.
//!
//! Every request carries the session's bearer token when one exists. A 401
//! from any endpoint force-clears the session and fires the expiry hook
//! (wired to a `session-expired` event the webview turns into a login
//! redirect); every other failure is handed back to the caller untouched.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::session::SessionStore;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Event the webview listens on to navigate back to `/login`.
pub const SESSION_EXPIRED_EVENT: &str = "session-expired";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("authentication expired")]
    Unauthorized,
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error body shape of the backend (`{"detail": ...}`). `detail` is a plain
/// string for domain errors and a structure for validation errors.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    on_expiry: ExpiryHook,
}

impl ApiClient {
    /// `on_expiry` runs after a 401 has cleared the session.
    pub fn new(session: SessionStore, on_expiry: impl Fn() + Send + Sync + 'static) -> Self {
        let base_url = std::env::var("COACHDESK_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url, session, on_expiry)
    }

    pub fn with_base_url(
        base_url: String,
        session: SessionStore,
        on_expiry: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
            on_expiry: Arc::new(on_expiry),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST with no payload, for action endpoints like approve/reject.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.http.patch(self.url(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// DELETE; the backend answers 204 with no body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    /// Attach the bearer token, dispatch, and inspect the status.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            log::info!("Received 401, clearing session");
            self.session.clear();
            (self.on_expiry)();
            return Err(ApiError::Unauthorized);
        }

        if status.is_client_error() || status.is_server_error() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .map(format_detail)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }
}

fn format_detail(detail: serde_json::Value) -> String {
    match detail {
        serde_json::Value::String(message) => message,
        other => other.to_string(),
    }
}
