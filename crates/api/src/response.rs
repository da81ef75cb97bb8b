//! Response envelopes shared by the user handlers.
//!
//! The frontend reads profiles from `{ "user": ... }` and LinkedIn settings
//! from `{ "linkedinSettings": ... }`.

use serde::Serialize;
use skillswap_core::linkedin::LinkedInSettings;
use skillswap_core::profile::UserProfile;

/// `{ "user": UserProfile }` envelope.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserProfile,
}

/// `{ "linkedinSettings": LinkedInSettings }` envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInSettingsResponse {
    pub linkedin_settings: LinkedInSettings,
}
