//! Backend endpoint paths, relative to the API base URL.

pub const HEALTH: &str = "/health";

pub const USER_PROFILE: &str = "/users/profile";
pub const LINKEDIN_SETTINGS: &str = "/users/linkedin-settings";

/// Path of a single user's public profile.
pub fn user(user_id: &str) -> String {
    format!("/users/{user_id}")
}
