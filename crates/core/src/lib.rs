//! SkillSwap domain types and profile validation.
//!
//! Pure logic only: the LinkedIn profile-URL and visibility validators, the
//! user profile model with its LinkedIn sub-record, and the error taxonomy
//! shared by the client gateway and the backend.

pub mod error;
pub mod linkedin;
pub mod profile;
pub mod types;
