#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use skillswap_api::config::ServerConfig;
use skillswap_api::router::build_app_router;
use skillswap_api::state::AppState;
use skillswap_api::store::seed::demo_profile;
use skillswap_api::store::{InMemoryUserStore, UserStore};
use skillswap_core::profile::UserProfile;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        seed_demo_users: false,
    }
}

/// Build the full application router over `store`.
pub fn build_test_app_with(store: Arc<InMemoryUserStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the application over an in-memory store holding the demo profile
/// and a second member.
pub async fn build_test_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    store.insert(demo_profile()).await.unwrap();
    store.insert(other_member()).await.unwrap();
    (build_test_app_with(Arc::clone(&store)), store)
}

/// A second member whose LinkedIn URL is restricted to connections.
pub fn other_member() -> UserProfile {
    let mut profile = UserProfile::new("user_456", "Maya Patel", "maya@example.com");
    profile.linkedin_url = Some("https://www.linkedin.com/in/maya-patel".into());
    profile.linkedin_visibility = Some("connections".parse().unwrap());
    profile
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_as(app: Router, uri: &str, user_id: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(user_id), None).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    user_id: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, user_id, Some(body)).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
