//! Integration tests for the member profile and LinkedIn settings endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_as, patch_json};
use serde_json::json;
use skillswap_api::store::UserStore;

const SETTINGS: &str = "/api/users/linkedin-settings";

// ---------------------------------------------------------------------------
// PATCH /api/users/linkedin-settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_linkedin_settings_persists_and_returns_settings() {
    let (app, store) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        Some("user_123"),
        json!({
            "userId": "user_123",
            "linkedinUrl": "https://linkedin.com/in/alex-thompson",
            "linkedinVisibility": "connections"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["linkedinSettings"]["linkedinUrl"],
        "https://linkedin.com/in/alex-thompson"
    );
    assert_eq!(json["linkedinSettings"]["linkedinVisibility"], "connections");

    let stored = store.find("user_123").await.unwrap().unwrap();
    assert_eq!(
        stored.linkedin_url.as_deref(),
        Some("https://linkedin.com/in/alex-thompson")
    );
}

#[tokio::test]
async fn invalid_url_returns_400_with_validation_message() {
    let (app, store) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        None,
        json!({
            "userId": "user_123",
            "linkedinUrl": "https://www.linkedin.com/company/example",
            "linkedinVisibility": "everyone"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Invalid LinkedIn URL"));

    let stored = store.find("user_123").await.unwrap().unwrap();
    assert_eq!(stored.linkedin_url, None);
}

#[tokio::test]
async fn invalid_visibility_returns_400() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        None,
        json!({ "userId": "user_123", "linkedinVisibility": "everyone" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("Invalid visibility"));
}

#[tokio::test]
async fn explicit_null_url_clears_stored_url() {
    let (app, store) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        Some("user_456"),
        json!({ "userId": "user_456", "linkedinUrl": null }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["linkedinSettings"]["linkedinUrl"].is_null());
    assert_eq!(json["linkedinSettings"]["linkedinVisibility"], "connections");

    let stored = store.find("user_456").await.unwrap().unwrap();
    assert_eq!(stored.linkedin_url, None);
}

#[tokio::test]
async fn unknown_user_returns_404() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        None,
        json!({ "userId": "ghost", "linkedinVisibility": "public" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "User with id ghost not found");
}

#[tokio::test]
async fn changing_another_users_settings_is_forbidden() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        Some("user_123"),
        json!({ "userId": "user_456", "linkedinVisibility": "public" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_user_id_in_body_is_rejected() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(app, SETTINGS, None, json!({ "userId": " " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn body_without_user_id_returns_400_json() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        None,
        json!({ "linkedinVisibility": "public" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("userId"));
}

#[tokio::test]
async fn wrongly_typed_field_returns_400_json() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        None,
        json!({ "userId": "user_123", "linkedinVisibility": 3 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn user_id_with_surrounding_whitespace_matches_caller() {
    let (app, store) = common::build_test_app().await;

    let response = patch_json(
        app,
        SETTINGS,
        Some("user_123"),
        json!({ "userId": " user_123 ", "linkedinVisibility": "private" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let stored = store.find("user_123").await.unwrap().unwrap();
    assert_eq!(
        stored.linkedin_visibility.map(|v| v.as_str()),
        Some("private")
    );
}

// ---------------------------------------------------------------------------
// GET /api/users/linkedin-settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_own_linkedin_settings() {
    let (app, _) = common::build_test_app().await;

    let response = get_as(app, SETTINGS, "user_456").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["linkedinSettings"]["linkedinUrl"],
        "https://www.linkedin.com/in/maya-patel"
    );
}

#[tokio::test]
async fn own_settings_require_caller_identity() {
    let (app, _) = common::build_test_app().await;

    let response = get(app, SETTINGS).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// /api/users/profile
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_own_profile() {
    let (app, _) = common::build_test_app().await;

    let response = get_as(app, "/api/users/profile", "user_123").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Alex Thompson");
    assert_eq!(json["user"]["sessionsCompleted"], 24);
}

#[tokio::test]
async fn patch_profile_applies_supplied_fields_only() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        "/api/users/profile",
        Some("user_123"),
        json!({
            "location": null,
            "skillsWanted": ["Spanish", " Spanish ", "Pottery"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Alex Thompson");
    assert!(json["user"]["location"].is_null());
    assert_eq!(json["user"]["skillsWanted"], json!(["Pottery", "Spanish"]));
}

#[tokio::test]
async fn patch_profile_rejects_invalid_linkedin_url() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        "/api/users/profile",
        Some("user_123"),
        json!({ "linkedinUrl": "linkedin.com/in/johndoe" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"]
        .as_str()
        .unwrap()
        .contains("Invalid LinkedIn URL"));
}

#[tokio::test]
async fn patch_profile_with_malformed_body_returns_400_json() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        "/api/users/profile",
        Some("user_123"),
        json!({ "skillsWanted": "Spanish" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn patch_profile_for_unknown_caller_returns_404() {
    let (app, _) = common::build_test_app().await;

    let response = patch_json(
        app,
        "/api/users/profile",
        Some("ghost"),
        json!({ "bio": "hello" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// GET /api/users/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connections_only_url_is_hidden_from_other_members() {
    let (app, _) = common::build_test_app().await;

    let response = get_as(app, "/api/users/user_456", "user_123").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Maya Patel");
    assert!(json["user"]["linkedinUrl"].is_null());
}

#[tokio::test]
async fn owner_sees_own_restricted_url() {
    let (app, _) = common::build_test_app().await;

    let response = get_as(app, "/api/users/user_456", "user_456").await;

    let json = body_json(response).await;
    assert_eq!(
        json["user"]["linkedinUrl"],
        "https://www.linkedin.com/in/maya-patel"
    );
}

#[tokio::test]
async fn unknown_member_returns_404() {
    let (app, _) = common::build_test_app().await;

    let response = get(app, "/api/users/nobody").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
