use crate::types::UserId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: UserId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Fallback message for failures that carry nothing displayable.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Failure outcome of a profile service operation.
///
/// Every variant renders a non-empty, user-displayable message via
/// [`ServiceError::message`], so callers can branch on the error and show it
/// without further inspection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The candidate LinkedIn URL does not have the profile-URL shape.
    #[error("{}", crate::linkedin::INVALID_URL_MESSAGE)]
    InvalidLinkedInUrl,

    /// The candidate visibility is not one of the accepted literals.
    #[error("{}", crate::linkedin::INVALID_VISIBILITY_MESSAGE)]
    InvalidVisibility { value: String },

    /// The persistence collaborator rejected the request or could not be
    /// reached. `status` is `None` for network-level failures.
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("{}", UNKNOWN_ERROR_MESSAGE)]
    Unknown,
}

impl ServiceError {
    /// Build an upstream failure, coercing an empty message to [`ServiceError::Unknown`].
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Unknown;
        }
        Self::Upstream { status, message }
    }

    /// Human-readable message for display.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the failure was raised locally, before any upstream call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidLinkedInUrl | Self::InvalidVisibility { .. }
        )
    }
}

/// Outcome of a profile update: the persisted data, or why it was rejected.
///
/// Exactly one side is populated by construction.
pub type UpdateResult<T> = Result<T, ServiceError>;
