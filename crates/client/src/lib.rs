//! SkillSwap HTTP client library.
//!
//! Provides the JSON transport for the SkillSwap backend, the persistence
//! collaborator interface ([`store::ProfileStore`]) with its HTTP
//! implementation, and the profile update gateway ([`service::UserService`])
//! that validates input before delegating and reports every failure as data.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod service;
pub mod store;
