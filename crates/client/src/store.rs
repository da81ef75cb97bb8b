//! Persistence collaborator interface and its HTTP implementation.

use std::future::Future;

use serde::Deserialize;
use skillswap_core::linkedin::LinkedInSettings;
use skillswap_core::profile::{LinkedInSettingsRequest, ProfileUpdate, UserProfile};

use crate::api::{ApiClient, ApiError};
use crate::endpoints;

/// Remote store of user profiles consumed by [`crate::service::UserService`].
///
/// Implementations report every failure as an [`ApiError`]; they never retry.
pub trait ProfileStore: Send + Sync {
    /// Apply a validated LinkedIn settings change and return the stored settings.
    fn update_linkedin_settings(
        &self,
        request: &LinkedInSettingsRequest,
    ) -> impl Future<Output = Result<LinkedInSettings, ApiError>> + Send;

    /// Fetch another user's profile, as visible to the caller.
    fn get_user(&self, user_id: &str) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Fetch the caller's own profile.
    fn get_my_profile(&self) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Apply a partial update to the caller's profile.
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ApiError>> + Send;

    /// Fetch the caller's LinkedIn settings.
    fn get_my_linkedin_settings(
        &self,
    ) -> impl Future<Output = Result<LinkedInSettings, ApiError>> + Send;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkedInSettingsEnvelope {
    linkedin_settings: LinkedInSettings,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: UserProfile,
}

/// [`ProfileStore`] backed by the SkillSwap REST API.
#[derive(Debug, Clone)]
pub struct HttpProfileStore {
    api: ApiClient,
}

impl HttpProfileStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl ProfileStore for HttpProfileStore {
    async fn update_linkedin_settings(
        &self,
        request: &LinkedInSettingsRequest,
    ) -> Result<LinkedInSettings, ApiError> {
        let envelope: LinkedInSettingsEnvelope =
            self.api.patch(endpoints::LINKEDIN_SETTINGS, request).await?;
        Ok(envelope.linkedin_settings)
    }

    async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope = self.api.get(&endpoints::user(user_id)).await?;
        Ok(envelope.user)
    }

    async fn get_my_profile(&self) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope = self.api.get(endpoints::USER_PROFILE).await?;
        Ok(envelope.user)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope = self.api.patch(endpoints::USER_PROFILE, update).await?;
        Ok(envelope.user)
    }

    async fn get_my_linkedin_settings(&self) -> Result<LinkedInSettings, ApiError> {
        let envelope: LinkedInSettingsEnvelope =
            self.api.get(endpoints::LINKEDIN_SETTINGS).await?;
        Ok(envelope.linkedin_settings)
    }
}
