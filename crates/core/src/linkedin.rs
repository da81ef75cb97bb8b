//! LinkedIn profile link validation and visibility rules.
//!
//! The URL check is structural only: it never touches the network and never
//! rewrites its input.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Whole-string pattern for a personal LinkedIn profile link.
///
/// The scheme is required; `www.` and a single trailing slash are optional.
pub const PROFILE_URL_PATTERN: &str = r"^https?://(www\.)?linkedin\.com/in/[a-zA-Z0-9_-]+/?$";

static PROFILE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROFILE_URL_PATTERN).expect("valid regex"));

pub const VISIBILITY_PUBLIC: &str = "public";
pub const VISIBILITY_CONNECTIONS: &str = "connections";
pub const VISIBILITY_PRIVATE: &str = "private";

/// All accepted visibility literals.
pub const VALID_VISIBILITIES: &[&str] =
    &[VISIBILITY_PUBLIC, VISIBILITY_CONNECTIONS, VISIBILITY_PRIVATE];

pub const INVALID_URL_MESSAGE: &str =
    "Invalid LinkedIn URL. Expected format: https://linkedin.com/in/username";

pub const INVALID_VISIBILITY_MESSAGE: &str =
    "Invalid visibility. Must be one of: public, connections, private";

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Who may see a user's linked LinkedIn profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkedInVisibility {
    #[default]
    Public,
    Connections,
    Private,
}

impl LinkedInVisibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => VISIBILITY_PUBLIC,
            Self::Connections => VISIBILITY_CONNECTIONS,
            Self::Private => VISIBILITY_PRIVATE,
        }
    }

    /// Whether a viewer in `audience` may see the linked profile.
    pub fn is_visible_to(&self, audience: Audience) -> bool {
        match self {
            Self::Public => true,
            Self::Connections => matches!(audience, Audience::Owner | Audience::Connection),
            Self::Private => audience == Audience::Owner,
        }
    }
}

impl FromStr for LinkedInVisibility {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VISIBILITY_PUBLIC => Ok(Self::Public),
            VISIBILITY_CONNECTIONS => Ok(Self::Connections),
            VISIBILITY_PRIVATE => Ok(Self::Private),
            _ => Err(CoreError::Validation(INVALID_VISIBILITY_MESSAGE.to_string())),
        }
    }
}

impl fmt::Display for LinkedInVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relationship between a viewer and the owner of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// The profile's own user.
    Owner,
    /// A user connected to the owner.
    Connection,
    /// Anyone else, including anonymous viewers.
    Public,
}

// ---------------------------------------------------------------------------
// Settings record
// ---------------------------------------------------------------------------

/// LinkedIn sub-record of a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInSettings {
    pub linkedin_url: Option<String>,
    pub linkedin_visibility: LinkedInVisibility,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a candidate LinkedIn profile URL.
///
/// Absent and empty values are valid because the field is optional.
pub fn is_valid_linkedin_url(url: Option<&str>) -> bool {
    match url {
        None => true,
        Some(u) if u.is_empty() => true,
        Some(u) => PROFILE_URL_RE.is_match(u),
    }
}

/// Check a candidate visibility literal. Case-sensitive.
pub fn is_valid_visibility(value: &str) -> bool {
    VALID_VISIBILITIES.contains(&value)
}

/// Error-returning form of [`is_valid_linkedin_url`].
pub fn validate_linkedin_url(url: Option<&str>) -> Result<(), CoreError> {
    if is_valid_linkedin_url(url) {
        Ok(())
    } else {
        Err(CoreError::Validation(INVALID_URL_MESSAGE.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
