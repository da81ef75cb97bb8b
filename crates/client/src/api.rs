//! JSON transport for the SkillSwap backend.
//!
//! Wraps [`reqwest`] with base-URL joining, session header attachment, and
//! uniform classification of failures: a non-2xx status, a network failure,
//! and an undecodable body each become one [`ApiError`] variant.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use skillswap_core::error::ServiceError;

use crate::config::{ApiConfig, Session};

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Message used when an error response carries nothing better.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Errors from the HTTP transport layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Best-available human-readable message from the response.
        message: String,
    },

    /// A success response whose body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The session could not be encoded into request headers.
    #[error("Invalid session header: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// HTTP status of the failure, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Decode(_) | Self::InvalidHeader(_) => None,
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        ServiceError::upstream(err.status(), err.to_string())
    }
}

/// HTTP client for the SkillSwap backend, bound to one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client from configuration, building a fresh connection pool.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config, session))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ApiConfig, session: Session) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }

    // ---- private helpers ----

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%method, %url, "Sending API request");

        let mut builder = self
            .client
            .request(method, url.as_str())
            .headers(self.session_headers()?);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::parse_response(response).await
    }

    /// Headers derived from the session, plus the JSON content type.
    fn session_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.session.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(user_id) = &self.session.user_id {
            let value = HeaderValue::from_str(user_id)
                .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
            headers.insert(USER_ID_HEADER, value);
        }
        Ok(headers)
    }

    /// Classify the response and decode a success body into `T`.
    ///
    /// Empty or non-JSON success bodies decode as JSON `null`.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, is_json, &bytes),
            });
        }

        decode_body(is_json, &bytes)
    }
}

/// Best-available message for an error response.
///
/// JSON bodies contribute their `message` (or `error`) string field; other
/// bodies fall back to the status reason phrase.
fn error_message(status: StatusCode, is_json: bool, body: &[u8]) -> String {
    if is_json {
        return serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"].iter().find_map(|key| {
                    v.get(key)
                        .and_then(|m| m.as_str())
                        .filter(|m| !m.trim().is_empty())
                        .map(str::to_string)
                })
            })
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    }
    status
        .canonical_reason()
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
        .to_string()
}

fn decode_body<T: DeserializeOwned>(is_json: bool, body: &[u8]) -> Result<T, ApiError> {
    let value = if is_json && !body.is_empty() {
        serde_json::from_slice::<serde_json::Value>(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
    } else {
        serde_json::Value::Null
    };
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
