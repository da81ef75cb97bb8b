//! Request extractors.
//!
//! Caller identity is asserted by the fronting auth gateway through the `x-user-id`
//! header; this server does not issue or verify credentials.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::request::Parts;
use skillswap_core::error::CoreError;
use skillswap_core::types::UserId;

use crate::error::AppError;

/// Header carrying the authenticated caller's id.
pub const USER_ID_HEADER: &str = "x-user-id";

fn caller_id(parts: &Parts) -> Option<UserId> {
    parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// The authenticated caller. Rejects with 401 when the header is missing.
///
/// ```ignore
/// async fn my_handler(CurrentUser(user_id): CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(%user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        caller_id(parts).map(CurrentUser).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(format!(
                "Missing {USER_ID_HEADER} header"
            )))
        })
    }
}

/// The caller if one is identified; anonymous requests are allowed.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<UserId>);

impl Viewer {
    /// Whether the viewer is the owner of `user_id`'s profile.
    pub fn is(&self, user_id: &str) -> bool {
        self.0.as_deref() == Some(user_id)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Viewer(caller_id(parts)))
    }
}

/// JSON body extractor whose rejection renders as an [`AppError`], so a
/// malformed body gets the same `{ "message", "code" }` shape as every
/// other failure.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
