//! Handlers for member profiles and LinkedIn settings.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use skillswap_core::error::CoreError;
use skillswap_core::linkedin::Audience;
use skillswap_core::profile::{deserialize_some, ProfileUpdate, UpdateLinkedInSettings};
use skillswap_core::types::UserId;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, CurrentUser, Viewer};
use crate::response::{LinkedInSettingsResponse, UserResponse};
use crate::state::AppState;

fn user_not_found(id: impl Into<UserId>) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "User",
        id: id.into(),
    })
}

// ---------------------------------------------------------------------------
// Own profile
// ---------------------------------------------------------------------------

/// GET /api/users/profile
pub async fn get_my_profile(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .store
        .find(&user_id)
        .await?
        .ok_or_else(|| user_not_found(user_id.as_str()))?;

    Ok(Json(UserResponse { user }))
}

/// PATCH /api/users/profile
///
/// Apply a partial update to the caller's profile. Only supplied fields
/// change; an explicit `null` clears a nullable field.
pub async fn update_my_profile(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> AppResult<Json<UserResponse>> {
    update.validate()?;

    let user = state
        .store
        .update_profile(&user_id, &update)
        .await?
        .ok_or_else(|| user_not_found(user_id.as_str()))?;

    tracing::info!(%user_id, "Profile updated");
    Ok(Json(UserResponse { user }))
}

// ---------------------------------------------------------------------------
// LinkedIn settings
// ---------------------------------------------------------------------------

/// GET /api/users/linkedin-settings
pub async fn get_my_linkedin_settings(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<LinkedInSettingsResponse>> {
    let user = state
        .store
        .find(&user_id)
        .await?
        .ok_or_else(|| user_not_found(user_id.as_str()))?;

    Ok(Json(LinkedInSettingsResponse {
        linkedin_settings: user.linkedin_settings().unwrap_or_default(),
    }))
}

/// Request body for `PATCH /api/users/linkedin-settings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInSettingsBody {
    pub user_id: UserId,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default)]
    pub linkedin_visibility: Option<String>,
}

/// PATCH /api/users/linkedin-settings
///
/// Body `{ userId, linkedinUrl?, linkedinVisibility? }`. The URL is checked
/// before the visibility; either failure returns 400 with the validation
/// message. Surrounding whitespace in `userId` is ignored. A caller
/// identified by `x-user-id` may only change their own settings.
pub async fn update_linkedin_settings(
    viewer: Viewer,
    State(state): State<AppState>,
    AppJson(body): AppJson<LinkedInSettingsBody>,
) -> AppResult<Json<LinkedInSettingsResponse>> {
    let user_id = body.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::BadRequest("userId is required".into()));
    }
    if viewer.0.is_some() && !viewer.is(user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot change another user's LinkedIn settings".into(),
        )));
    }

    let change = UpdateLinkedInSettings {
        linkedin_url: body.linkedin_url,
        linkedin_visibility: body.linkedin_visibility,
    };
    let request = change.into_request(user_id)?;

    let linkedin_settings = state
        .store
        .update_linkedin_settings(&request)
        .await?
        .ok_or_else(|| user_not_found(request.user_id.as_str()))?;

    tracing::info!(
        user_id = %request.user_id,
        visibility = %linkedin_settings.linkedin_visibility,
        "LinkedIn settings updated",
    );

    Ok(Json(LinkedInSettingsResponse { linkedin_settings }))
}

// ---------------------------------------------------------------------------
// Other members
// ---------------------------------------------------------------------------

/// GET /api/users/{id}
///
/// The LinkedIn URL is withheld unless the viewer may see it. Without a
/// connection graph every non-owner is treated as the public.
pub async fn get_user(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .store
        .find(&id)
        .await?
        .ok_or_else(|| user_not_found(id.as_str()))?;

    let audience = if viewer.is(&id) {
        Audience::Owner
    } else {
        Audience::Public
    };

    Ok(Json(UserResponse {
        user: user.redacted_for(audience),
    }))
}
