use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use skillswap_core::error::CoreError;
use skillswap_core::linkedin::LinkedInSettings;
use skillswap_core::profile::{LinkedInSettingsRequest, ProfileUpdate, UserProfile};
use skillswap_core::types::UserId;
use tokio::sync::RwLock;

use super::UserStore;
use crate::error::AppResult;

/// Process-local store used when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, UserProfile>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }

    async fn find(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn insert(&self, mut profile: UserProfile) -> AppResult<UserProfile> {
        let mut users = self.users.write().await;
        if users.contains_key(&profile.id) {
            return Err(CoreError::Conflict(format!("User {} already exists", profile.id)).into());
        }
        if users.values().any(|u| u.email == profile.email) {
            return Err(CoreError::Conflict(format!(
                "Email {} is already registered",
                profile.email
            ))
            .into());
        }

        let now = Utc::now();
        profile.created_at.get_or_insert(now);
        profile.updated_at = Some(now);
        users.insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> AppResult<Option<UserProfile>> {
        let mut users = self.users.write().await;
        let Some(current) = users.get_mut(user_id) else {
            return Ok(None);
        };

        // Apply to a copy so a rejected update leaves the stored profile intact.
        let mut next = current.clone();
        update.apply_to(&mut next)?;
        next.updated_at = Some(Utc::now());
        *current = next.clone();
        Ok(Some(next))
    }

    async fn update_linkedin_settings(
        &self,
        request: &LinkedInSettingsRequest,
    ) -> AppResult<Option<LinkedInSettings>> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&request.user_id).map(|profile| {
            let settings = request.apply_to(profile);
            profile.updated_at = Some(Utc::now());
            settings
        }))
    }
}
