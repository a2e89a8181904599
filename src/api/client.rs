//! Shared HTTP client for the ConnectSphere API.
//!
//! Owns the base URL and the bearer token, serializes request bodies,
//! decodes JSON responses, and maps non-2xx statuses to [`ApiError`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::traits::{Headers, HttpClient, HttpError};

/// Default base URL of the ConnectSphere API.
pub const DEFAULT_BASE_URL: &str = "https://api.connectsphere.app/api";

/// Errors surfaced by the API modules.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connectivity, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Server returned a non-2xx status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Input rejected before any request was issued
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Client for the ConnectSphere REST API.
///
/// All requests except register/login carry the bearer token; the token is
/// set by the session flows after login and cleared on logout.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a client against the default base URL.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
            auth_token: None,
        }
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
            auth_token: None,
        }
    }

    /// Replace the bearer token.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    /// The current bearer token, if any.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = &self.auth_token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn decode<T: DeserializeOwned>(response: crate::traits::Response) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Server {
                status: response.status,
                message: response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }
        Ok(response.json()?)
    }

    fn check_status(response: crate::traits::Response) -> Result<(), ApiError> {
        if !response.is_success() {
            return Err(ApiError::Server {
                status: response.status,
                message: response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }
        Ok(())
    }

    /// GET `path` and decode the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self.http.get(&url, &self.headers()).await?;
        Self::decode(response)
    }

    /// POST `body` to `path` and decode the JSON response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let body = serde_json::to_string(body)?;
        let response = self.http.post(&url, &body, &self.headers()).await?;
        Self::decode(response)
    }

    /// POST to `path` with an empty body, ignoring the response body.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let response = self.http.post(&url, "", &self.headers()).await?;
        Self::check_status(response)
    }

    /// PUT `body` to `path` and decode the JSON response.
    pub async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let body = serde_json::to_string(body)?;
        let response = self.http.put(&url, &body, &self.headers()).await?;
        Self::decode(response)
    }

    /// DELETE `path`, ignoring the response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(&url, &self.headers()).await?;
        Self::check_status(response)
    }
}
