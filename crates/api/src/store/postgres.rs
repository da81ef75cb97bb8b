use async_trait::async_trait;
use skillswap_core::linkedin::LinkedInSettings;
use skillswap_core::profile::{LinkedInSettingsRequest, ProfileUpdate, UserProfile};
use skillswap_db::models::user::{CreateUser, UpdateUserProfile};
use skillswap_db::repositories::UserRepo;
use skillswap_db::DbPool;

use super::UserStore;
use crate::error::AppResult;

/// [`UserStore`] backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<()> {
        skillswap_db::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        let row = UserRepo::find_by_id(&self.pool, user_id).await?;
        Ok(row.map(UserProfile::try_from).transpose()?)
    }

    async fn insert(&self, profile: UserProfile) -> AppResult<UserProfile> {
        let row = UserRepo::create(&self.pool, &CreateUser::from(&profile)).await?;
        Ok(UserProfile::try_from(row)?)
    }

    async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> AppResult<Option<UserProfile>> {
        let input = UpdateUserProfile::try_from_update(update)?;
        let row = UserRepo::update_profile(&self.pool, user_id, &input).await?;
        Ok(row.map(UserProfile::try_from).transpose()?)
    }

    async fn update_linkedin_settings(
        &self,
        request: &LinkedInSettingsRequest,
    ) -> AppResult<Option<LinkedInSettings>> {
        let row = UserRepo::update_linkedin_settings(&self.pool, request).await?;
        let profile = row.map(UserProfile::try_from).transpose()?;
        Ok(profile.map(|p| p.linkedin_settings().unwrap_or_default()))
    }
}
