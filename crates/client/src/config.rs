use std::fmt;
use std::time::Duration;

use skillswap_core::types::UserId;

/// Default backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (no trailing slash).
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                      |
    /// |------------------------------|------------------------------|
    /// | `SKILLSWAP_API_BASE_URL`     | `http://localhost:5000/api`  |
    /// | `SKILLSWAP_API_TIMEOUT_SECS` | `30`                         |
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_env() -> Self {
        let base_url = std::env::var("SKILLSWAP_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs = match std::env::var("SKILLSWAP_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "SKILLSWAP_API_TIMEOUT_SECS is not a valid u64, using default"
                );
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self {
            timeout: Duration::from_secs(timeout_secs),
            ..Self::new(base_url)
        }
    }
}

/// Caller identity attached to every request.
///
/// Passed explicitly to the client; nothing is read from ambient storage.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Sent as `x-user-id`.
    pub user_id: Option<UserId>,
    /// Sent as `Authorization: Bearer <token>`.
    pub token: Option<String>,
}

impl Session {
    /// A session with no identity.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
