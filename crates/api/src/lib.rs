//! SkillSwap API server library.
//!
//! Exposes configuration, state, error handling, the user store and the route
//! tree so the binary entrypoint, integration tests and the client crate's
//! end-to-end tests all build the same application.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
