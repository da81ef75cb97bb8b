//! Profile persistence behind the HTTP handlers.
//!
//! [`UserStore`] is object-safe so [`crate::state::AppState`] can hold either
//! backend behind an `Arc<dyn UserStore>`.

mod memory;
mod postgres;
pub mod seed;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use skillswap_core::linkedin::LinkedInSettings;
use skillswap_core::profile::{LinkedInSettingsRequest, ProfileUpdate, UserProfile};

use crate::error::AppResult;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> AppResult<()>;

    /// Find a profile by user id.
    async fn find(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Insert a new profile. Fails with a conflict if the id or email is taken.
    async fn insert(&self, profile: UserProfile) -> AppResult<UserProfile>;

    /// Apply a partial update. Returns `None` if the user does not exist.
    async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> AppResult<Option<UserProfile>>;

    /// Apply a validated LinkedIn settings change and return the stored
    /// settings. Returns `None` if the user does not exist.
    async fn update_linkedin_settings(
        &self,
        request: &LinkedInSettingsRequest,
    ) -> AppResult<Option<LinkedInSettings>>;
}
