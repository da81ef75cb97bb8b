//! Profile update gateway.
//!
//! [`UserService`] validates caller input before any network call, delegates
//! to an injected [`ProfileStore`], and folds every failure into
//! [`ServiceError`]. No operation panics, retries, or caches.

use skillswap_core::error::{ServiceError, UpdateResult};
use skillswap_core::linkedin::LinkedInSettings;
use skillswap_core::profile::{ProfileUpdate, UpdateLinkedInSettings, UserProfile};

use crate::api::ApiError;
use crate::store::ProfileStore;

/// User-facing profile operations over a [`ProfileStore`].
#[derive(Debug, Clone)]
pub struct UserService<S> {
    store: S,
}

impl<S: ProfileStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and submit a LinkedIn settings change for `user_id`.
    ///
    /// Rejected input returns before the store is called. Outcomes are exactly:
    /// invalid URL, invalid visibility, the stored settings, or an upstream
    /// failure.
    pub async fn update_linkedin_settings(
        &self,
        user_id: &str,
        params: UpdateLinkedInSettings,
    ) -> UpdateResult<LinkedInSettings> {
        tracing::debug!(user_id, "Updating LinkedIn settings");

        let request = params.into_request(user_id).inspect_err(|e| {
            tracing::warn!(user_id, error = %e, "LinkedIn settings rejected");
        })?;

        let settings = self
            .store
            .update_linkedin_settings(&request)
            .await
            .map_err(|e| upstream_failure("update_linkedin_settings", e))?;

        tracing::info!(
            user_id,
            visibility = %settings.linkedin_visibility,
            has_url = settings.linkedin_url.is_some(),
            "LinkedIn settings updated",
        );
        Ok(settings)
    }

    /// Fetch a user's profile; the backend applies visibility rules.
    pub async fn get_user_profile(&self, user_id: &str) -> UpdateResult<UserProfile> {
        tracing::debug!(user_id, "Fetching user profile");
        self.store
            .get_user(user_id)
            .await
            .map_err(|e| upstream_failure("get_user_profile", e))
    }

    /// Fetch the caller's own profile.
    pub async fn get_my_profile(&self) -> UpdateResult<UserProfile> {
        tracing::debug!("Fetching own profile");
        self.store
            .get_my_profile()
            .await
            .map_err(|e| upstream_failure("get_my_profile", e))
    }

    /// Validate the LinkedIn fields of `update`, then submit it.
    pub async fn update_profile(&self, update: ProfileUpdate) -> UpdateResult<UserProfile> {
        tracing::debug!("Updating own profile");

        update.check_linkedin().inspect_err(|e| {
            tracing::warn!(error = %e, "Profile update rejected");
        })?;

        self.store
            .update_profile(&update)
            .await
            .map_err(|e| upstream_failure("update_profile", e))
    }

    /// Fetch the caller's LinkedIn settings.
    pub async fn get_my_linkedin_settings(&self) -> UpdateResult<LinkedInSettings> {
        tracing::debug!("Fetching own LinkedIn settings");
        self.store
            .get_my_linkedin_settings()
            .await
            .map_err(|e| upstream_failure("get_my_linkedin_settings", e))
    }
}

fn upstream_failure(operation: &'static str, err: ApiError) -> ServiceError {
    tracing::warn!(operation, status = ?err.status(), error = %err, "Upstream call failed");
    err.into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use skillswap_core::linkedin::LinkedInVisibility;
    use skillswap_core::profile::LinkedInSettingsRequest;

    use super::*;

    /// In-process store that records calls and either echoes or fails.
    #[derive(Default)]
    struct RecordingStore {
        calls: AtomicUsize,
        last_request: Mutex<Option<LinkedInSettingsRequest>>,
        fail_with: Option<(u16, &'static str)>,
    }

    impl RecordingStore {
        fn failing(status: u16, message: &'static str) -> Self {
            Self {
                fail_with: Some((status, message)),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn outcome<T>(&self, value: T) -> Result<T, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some((status, message)) => Err(ApiError::Status {
                    status,
                    message: message.to_string(),
                }),
                None => Ok(value),
            }
        }
    }

    impl ProfileStore for RecordingStore {
        async fn update_linkedin_settings(
            &self,
            request: &LinkedInSettingsRequest,
        ) -> Result<LinkedInSettings, ApiError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.outcome(LinkedInSettings {
                linkedin_url: request.linkedin_url.clone().flatten(),
                linkedin_visibility: request.linkedin_visibility.unwrap_or_default(),
            })
        }

        async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
            self.outcome(UserProfile::new(user_id, "Someone", "someone@example.com"))
        }

        async fn get_my_profile(&self) -> Result<UserProfile, ApiError> {
            self.outcome(UserProfile::new("me", "Me", "me@example.com"))
        }

        async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
            let mut profile = UserProfile::new("me", "Me", "me@example.com");
            update
                .apply_to(&mut profile)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            self.outcome(profile)
        }

        async fn get_my_linkedin_settings(&self) -> Result<LinkedInSettings, ApiError> {
            self.outcome(LinkedInSettings::default())
        }
    }

    // -- update_linkedin_settings ---------------------------------------------

    #[tokio::test]
    async fn invalid_url_short_circuits_without_store_call() {
        let service = UserService::new(RecordingStore::default());

        let result = service
            .update_linkedin_settings("user_1", UpdateLinkedInSettings::new().url("not a url"))
            .await;

        let err = result.unwrap_err();
        assert_eq!(err, ServiceError::InvalidLinkedInUrl);
        assert!(err.message().contains("Invalid LinkedIn URL"));
        assert_eq!(service.store().calls(), 0);
    }

    #[tokio::test]
    async fn invalid_visibility_short_circuits_without_store_call() {
        let service = UserService::new(RecordingStore::default());

        let result = service
            .update_linkedin_settings(
                "user_1",
                UpdateLinkedInSettings::new().visibility("everyone"),
            )
            .await;

        assert_matches!(
            &result,
            Err(ServiceError::InvalidVisibility { value }) if value == "everyone"
        );
        assert!(result.unwrap_err().message().contains("Invalid visibility"));
        assert_eq!(service.store().calls(), 0);
    }

    #[tokio::test]
    async fn valid_settings_are_submitted_and_returned() {
        let service = UserService::new(RecordingStore::default());

        let settings = service
            .update_linkedin_settings(
                "user_1",
                UpdateLinkedInSettings::new()
                    .url("https://linkedin.com/in/valid")
                    .visibility("public"),
            )
            .await
            .unwrap();

        assert_eq!(
            settings,
            LinkedInSettings {
                linkedin_url: Some("https://linkedin.com/in/valid".into()),
                linkedin_visibility: LinkedInVisibility::Public,
            }
        );
        assert_eq!(service.store().calls(), 1);

        let sent = service.store().last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.user_id, "user_1");
        assert_eq!(sent.linkedin_visibility, Some(LinkedInVisibility::Public));
    }

    #[tokio::test]
    async fn explicit_null_url_is_forwarded_as_clear() {
        let service = UserService::new(RecordingStore::default());

        let settings = service
            .update_linkedin_settings("user_1", UpdateLinkedInSettings::new().clear_url())
            .await
            .unwrap();

        assert_eq!(settings.linkedin_url, None);
        let sent = service.store().last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent.linkedin_url, Some(None));
    }

    #[tokio::test]
    async fn upstream_http_error_becomes_error_result() {
        let service = UserService::new(RecordingStore::failing(500, "Database unavailable"));

        let result = service
            .update_linkedin_settings(
                "user_1",
                UpdateLinkedInSettings::new()
                    .url("https://linkedin.com/in/valid")
                    .visibility("public"),
            )
            .await;

        assert_eq!(
            result,
            Err(ServiceError::Upstream {
                status: Some(500),
                message: "Database unavailable".into()
            })
        );
        assert_eq!(service.store().calls(), 1);
    }

    #[tokio::test]
    async fn upstream_error_without_message_becomes_unknown() {
        let service = UserService::new(RecordingStore::failing(502, ""));

        let err = service
            .update_linkedin_settings("user_1", UpdateLinkedInSettings::new())
            .await
            .unwrap_err();

        assert_eq!(err, ServiceError::Unknown);
        assert_eq!(err.message(), "Unknown error occurred");
    }

    // -- read and general update paths ----------------------------------------

    #[tokio::test]
    async fn get_user_profile_passes_through() {
        let service = UserService::new(RecordingStore::default());
        let profile = service.get_user_profile("user_9").await.unwrap();
        assert_eq!(profile.id, "user_9");
    }

    #[tokio::test]
    async fn read_failures_are_reported_as_data() {
        let service = UserService::new(RecordingStore::failing(404, "User not found"));

        assert_matches!(
            service.get_my_profile().await,
            Err(ServiceError::Upstream { status: Some(404), .. })
        );
        assert_matches!(
            service.get_my_linkedin_settings().await,
            Err(ServiceError::Upstream { status: Some(404), .. })
        );
    }

    #[tokio::test]
    async fn update_profile_rejects_invalid_visibility_locally() {
        let service = UserService::new(RecordingStore::default());
        let update = ProfileUpdate {
            linkedin_visibility: Some("friends".into()),
            ..Default::default()
        };

        assert_matches!(
            service.update_profile(update).await,
            Err(ServiceError::InvalidVisibility { .. })
        );
        assert_eq!(service.store().calls(), 0);
    }

    #[tokio::test]
    async fn update_profile_submits_valid_update() {
        let service = UserService::new(RecordingStore::default());
        let update = ProfileUpdate {
            location: Some(Some("Pune".into())),
            ..Default::default()
        };

        let profile = service.update_profile(update).await.unwrap();
        assert_eq!(profile.location.as_deref(), Some("Pune"));
        assert_eq!(service.store().calls(), 1);
    }
}
