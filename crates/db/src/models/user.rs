//! User entity model and DTOs.

use skillswap_core::error::CoreError;
use skillswap_core::linkedin::LinkedInVisibility;
use skillswap_core::profile::{normalize_skills, ProfileUpdate, UserProfile};
use skillswap_core::types::{Timestamp, UserId};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub credits: i64,
    pub rating: f64,
    pub sessions_completed: i32,
    pub community_meets: i32,
    pub is_verified: bool,
    pub is_trusted: bool,
    pub linked_in_verified: bool,
    pub member_since: Option<String>,
    pub linkedin_url: Option<String>,
    pub linkedin_visibility: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<User> for UserProfile {
    type Error = CoreError;

    /// Fails with [`CoreError::Internal`] if the row holds values the domain
    /// model cannot represent.
    fn try_from(row: User) -> Result<Self, Self::Error> {
        let corrupt = |column: &str, value: &dyn std::fmt::Display| {
            CoreError::Internal(format!(
                "users.{column} for {} holds invalid value {value}",
                row.id
            ))
        };

        let sessions_completed = u32::try_from(row.sessions_completed)
            .map_err(|_| corrupt("sessions_completed", &row.sessions_completed))?;
        let community_meets = u32::try_from(row.community_meets)
            .map_err(|_| corrupt("community_meets", &row.community_meets))?;
        let linkedin_visibility = row
            .linkedin_visibility
            .as_deref()
            .map(|v| {
                v.parse::<LinkedInVisibility>()
                    .map_err(|_| corrupt("linkedin_visibility", &v))
            })
            .transpose()?;

        Ok(UserProfile {
            id: row.id,
            email: row.email,
            name: row.name,
            avatar: row.avatar,
            location: row.location,
            bio: row.bio,
            skills_offered: row.skills_offered.into_iter().collect(),
            skills_wanted: row.skills_wanted.into_iter().collect(),
            credits: row.credits,
            rating: row.rating,
            sessions_completed,
            community_meets,
            is_verified: row.is_verified,
            is_trusted: row.is_trusted,
            linked_in_verified: row.linked_in_verified,
            member_since: row.member_since,
            linkedin_url: row.linkedin_url,
            linkedin_visibility,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        })
    }
}

/// DTO for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub credits: i64,
    pub rating: f64,
    pub sessions_completed: i32,
    pub community_meets: i32,
    pub is_verified: bool,
    pub is_trusted: bool,
    pub linked_in_verified: bool,
    pub member_since: Option<String>,
    pub linkedin_url: Option<String>,
    pub linkedin_visibility: Option<String>,
}

impl From<&UserProfile> for CreateUser {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: profile.id.clone(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            avatar: profile.avatar.clone(),
            location: profile.location.clone(),
            bio: profile.bio.clone(),
            skills_offered: profile.skills_offered.iter().cloned().collect(),
            skills_wanted: profile.skills_wanted.iter().cloned().collect(),
            credits: profile.credits,
            rating: profile.rating,
            sessions_completed: i32::try_from(profile.sessions_completed).unwrap_or(i32::MAX),
            community_meets: i32::try_from(profile.community_meets).unwrap_or(i32::MAX),
            is_verified: profile.is_verified,
            is_trusted: profile.is_trusted,
            linked_in_verified: profile.linked_in_verified,
            member_since: profile.member_since.clone(),
            linkedin_url: profile.linkedin_url.clone(),
            linkedin_visibility: profile
                .linkedin_visibility
                .map(|v| v.as_str().to_string()),
        }
    }
}

/// A column that can be left alone, set, or cleared.
///
/// Bound as a `(touch, value)` pair so SQL can distinguish "leave" from
/// "set to NULL".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullableChange {
    pub touch: bool,
    pub value: Option<String>,
}

impl NullableChange {
    fn from_patch(patch: &Option<Option<String>>) -> Self {
        match patch {
            None => Self::default(),
            Some(value) => Self {
                touch: true,
                value: value.clone().filter(|v| !v.is_empty()),
            },
        }
    }
}

/// Validated DTO for a partial profile update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserProfile {
    pub name: Option<String>,
    pub avatar: NullableChange,
    pub location: NullableChange,
    pub bio: NullableChange,
    pub skills_offered: Option<Vec<String>>,
    pub skills_wanted: Option<Vec<String>>,
    pub linkedin_url: NullableChange,
    pub linkedin_visibility: Option<String>,
}

impl UpdateUserProfile {
    /// Validate `update` and convert it into bindable column changes.
    pub fn try_from_update(update: &ProfileUpdate) -> Result<Self, CoreError> {
        update.validate()?;
        let visibility = update
            .check_linkedin()
            .map_err(|e| CoreError::Validation(e.message()))?;

        Ok(Self {
            name: update.name.as_ref().map(|n| n.trim().to_string()),
            avatar: NullableChange::from_patch(&update.avatar),
            location: NullableChange::from_patch(&update.location),
            bio: NullableChange::from_patch(&update.bio),
            skills_offered: update
                .skills_offered
                .as_deref()
                .map(|s| normalize_skills(s).into_iter().collect()),
            skills_wanted: update
                .skills_wanted
                .as_deref()
                .map(|s| normalize_skills(s).into_iter().collect()),
            linkedin_url: NullableChange::from_patch(&update.linkedin_url),
            linkedin_visibility: visibility.map(|v| v.as_str().to_string()),
        })
    }
}
