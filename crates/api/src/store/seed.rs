//! Demo data inserted at startup for local development.

use skillswap_core::linkedin::LinkedInVisibility;
use skillswap_core::profile::UserProfile;

use super::UserStore;
use crate::error::AppResult;

/// Id of the demo account the frontend signs in as during development.
pub const DEMO_USER_ID: &str = "user_123";

/// The demo member profile.
pub fn demo_profile() -> UserProfile {
    let mut profile = UserProfile::new(DEMO_USER_ID, "Alex Thompson", "alex@example.com");
    profile.location = Some("New York, NY".into());
    profile.bio = Some(
        "Product designer and music producer. Happy to trade design reviews \
         for photography tips."
            .into(),
    );
    profile.skills_offered = ["Product Design", "Figma", "Music Production", "Ableton Live"]
        .into_iter()
        .map(String::from)
        .collect();
    profile.skills_wanted = ["Photography", "Spanish", "Cooking", "Yoga"]
        .into_iter()
        .map(String::from)
        .collect();
    profile.credits = 12;
    profile.rating = 4.8;
    profile.sessions_completed = 24;
    profile.community_meets = 3;
    profile.is_verified = true;
    profile.is_trusted = true;
    profile.member_since = Some("January 2024".into());
    profile.linkedin_visibility = Some(LinkedInVisibility::Public);
    profile
}

/// Insert the demo profile unless it already exists.
///
/// Returns `true` if a profile was inserted.
pub async fn seed_demo_users(store: &dyn UserStore) -> AppResult<bool> {
    if store.find(DEMO_USER_ID).await?.is_some() {
        return Ok(false);
    }
    store.insert(demo_profile()).await?;
    tracing::info!(user_id = DEMO_USER_ID, "Seeded demo user");
    Ok(true)
}
