//! User profile model and the update DTOs that mutate it.
//!
//! Wire format is camelCase JSON. Inbound update DTOs keep visibility as the
//! raw caller string so that an unknown literal is reported as a validation
//! failure instead of a deserialization failure.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, ServiceError};
use crate::linkedin::{is_valid_linkedin_url, Audience, LinkedInSettings, LinkedInVisibility};
use crate::types::{Timestamp, UserId};

/// Maximum length of a display name in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a free-text bio in characters.
pub const MAX_BIO_LENGTH: usize = 2_000;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// A SkillSwap member profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub skills_offered: BTreeSet<String>,
    #[serde(default)]
    pub skills_wanted: BTreeSet<String>,
    #[serde(default)]
    pub credits: i64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub sessions_completed: u32,
    #[serde(default)]
    pub community_meets: u32,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_trusted: bool,
    #[serde(default)]
    pub linked_in_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub linkedin_visibility: Option<LinkedInVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl UserProfile {
    /// A fresh profile with empty skill sets and zeroed counters.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            avatar: None,
            location: None,
            bio: None,
            skills_offered: BTreeSet::new(),
            skills_wanted: BTreeSet::new(),
            credits: 0,
            rating: 0.0,
            sessions_completed: 0,
            community_meets: 0,
            is_verified: false,
            is_trusted: false,
            linked_in_verified: false,
            member_since: None,
            linkedin_url: None,
            linkedin_visibility: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// The LinkedIn sub-record, if either field has ever been set.
    pub fn linkedin_settings(&self) -> Option<LinkedInSettings> {
        if self.linkedin_url.is_none() && self.linkedin_visibility.is_none() {
            return None;
        }
        Some(LinkedInSettings {
            linkedin_url: self.linkedin_url.clone(),
            linkedin_visibility: self.linkedin_visibility.unwrap_or_default(),
        })
    }

    /// Overwrite the LinkedIn sub-record in place.
    pub fn apply_linkedin_settings(&mut self, settings: &LinkedInSettings) {
        self.linkedin_url = settings.linkedin_url.clone();
        self.linkedin_visibility = Some(settings.linkedin_visibility);
    }

    /// A copy of this profile with the LinkedIn URL removed when `audience`
    /// may not see it.
    pub fn redacted_for(&self, audience: Audience) -> Self {
        let mut profile = self.clone();
        let visibility = self.linkedin_visibility.unwrap_or_default();
        if !visibility.is_visible_to(audience) {
            profile.linkedin_url = None;
        }
        profile
    }
}

// ---------------------------------------------------------------------------
// Shared LinkedIn field checks
// ---------------------------------------------------------------------------

/// Deserialize a present field (including explicit `null`) as `Some`.
///
/// Paired with `#[serde(default)]` this distinguishes an absent field
/// (`None`) from an explicit `null` (`Some(None)`).
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Validate candidate LinkedIn fields in order: URL first, then visibility.
///
/// Returns the parsed visibility. An empty visibility string counts as not
/// supplied.
pub fn check_linkedin_fields(
    url: Option<Option<&str>>,
    visibility: Option<&str>,
) -> Result<Option<LinkedInVisibility>, ServiceError> {
    if let Some(Some(candidate)) = url {
        if !is_valid_linkedin_url(Some(candidate)) {
            return Err(ServiceError::InvalidLinkedInUrl);
        }
    }

    match visibility {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<LinkedInVisibility>()
            .map(Some)
            .map_err(|_| ServiceError::InvalidVisibility {
                value: value.to_string(),
            }),
    }
}

// ---------------------------------------------------------------------------
// LinkedIn settings update
// ---------------------------------------------------------------------------

/// Caller-supplied LinkedIn settings change.
///
/// `linkedin_url`: `None` leaves the stored URL untouched, `Some(None)`
/// clears it, `Some(Some(url))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkedInSettings {
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_visibility: Option<String>,
}

impl UpdateLinkedInSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.linkedin_url = Some(Some(url.into()));
        self
    }

    pub fn clear_url(mut self) -> Self {
        self.linkedin_url = Some(None);
        self
    }

    pub fn visibility(mut self, visibility: impl Into<String>) -> Self {
        self.linkedin_visibility = Some(visibility.into());
        self
    }

    /// Validate the change and bind it to `user_id`.
    pub fn into_request(
        self,
        user_id: impl Into<UserId>,
    ) -> Result<LinkedInSettingsRequest, ServiceError> {
        let visibility = check_linkedin_fields(
            self.linkedin_url.as_ref().map(|u| u.as_deref()),
            self.linkedin_visibility.as_deref(),
        )?;
        Ok(LinkedInSettingsRequest {
            user_id: user_id.into(),
            linkedin_url: self.linkedin_url,
            linkedin_visibility: visibility,
        })
    }
}

/// A validated LinkedIn settings change, as sent to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInSettingsRequest {
    pub user_id: UserId,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_visibility: Option<LinkedInVisibility>,
}

impl LinkedInSettingsRequest {
    /// Apply this change to `profile` and return the resulting settings.
    ///
    /// An empty URL string clears the stored URL.
    pub fn apply_to(&self, profile: &mut UserProfile) -> LinkedInSettings {
        if let Some(url) = &self.linkedin_url {
            profile.linkedin_url = url.clone().filter(|u| !u.is_empty());
        }
        if let Some(visibility) = self.linkedin_visibility {
            profile.linkedin_visibility = Some(visibility);
        }
        LinkedInSettings {
            linkedin_url: profile.linkedin_url.clone(),
            linkedin_visibility: profile.linkedin_visibility.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// General profile update
// ---------------------------------------------------------------------------

/// User-editable profile fields. Every field is optional; only supplied
/// fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_offered: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_wanted: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_visibility: Option<String>,
}

impl ProfileUpdate {
    /// Validate the LinkedIn fields carried by this update.
    pub fn check_linkedin(&self) -> Result<Option<LinkedInVisibility>, ServiceError> {
        check_linkedin_fields(
            self.linkedin_url.as_ref().map(|u| u.as_deref()),
            self.linkedin_visibility.as_deref(),
        )
    }

    /// Validate every supplied field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(CoreError::Validation("Name must not be empty".to_string()));
            }
            if trimmed.chars().count() > MAX_NAME_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
                )));
            }
        }
        if let Some(Some(bio)) = &self.bio {
            if bio.chars().count() > MAX_BIO_LENGTH {
                return Err(CoreError::Validation(format!(
                    "Bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
                )));
            }
        }
        self.check_linkedin()
            .map_err(|e| CoreError::Validation(e.message()))?;
        Ok(())
    }

    /// Validate, then apply the supplied fields to `profile`.
    pub fn apply_to(&self, profile: &mut UserProfile) -> Result<(), CoreError> {
        self.validate()?;
        let visibility = self
            .check_linkedin()
            .map_err(|e| CoreError::Validation(e.message()))?;

        if let Some(name) = &self.name {
            profile.name = name.trim().to_string();
        }
        if let Some(avatar) = &self.avatar {
            profile.avatar = avatar.clone();
        }
        if let Some(location) = &self.location {
            profile.location = location.clone();
        }
        if let Some(bio) = &self.bio {
            profile.bio = bio.clone();
        }
        if let Some(skills) = &self.skills_offered {
            profile.skills_offered = normalize_skills(skills);
        }
        if let Some(skills) = &self.skills_wanted {
            profile.skills_wanted = normalize_skills(skills);
        }
        if let Some(url) = &self.linkedin_url {
            profile.linkedin_url = url.clone().filter(|u| !u.is_empty());
        }
        if let Some(visibility) = visibility {
            profile.linkedin_visibility = Some(visibility);
        }
        Ok(())
    }
}

/// Trim skill labels and collapse blanks and duplicates.
pub fn normalize_skills(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
