pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                         service health (public)
///
/// /users/profile                  get, patch own profile
/// /users/linkedin-settings        get own, patch settings
/// /users/{id}                     get a member's profile (redacted)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
}
