use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Member profile routes, nested under `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(users::get_my_profile).patch(users::update_my_profile),
        )
        .route(
            "/linkedin-settings",
            get(users::get_my_linkedin_settings).patch(users::update_linkedin_settings),
        )
        .route("/{id}", get(users::get_user))
}
