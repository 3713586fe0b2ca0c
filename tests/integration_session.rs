mod common;

use axum::http::StatusCode;
use common::{ADMIN_ID, USER_ID, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_login_returns_token_for_user() {
    let app = setup_test_app().await;

    let (status, body) = app
        .request(
            "POST",
            "/session",
            None,
            Some(json!({ "email": "jinny@test.com", "password": "test" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let token = body["accessToken"].as_str().unwrap();
    assert_eq!(app.state.tokens.decode(token).unwrap(), USER_ID);
}

#[tokio::test]
async fn test_login_token_authenticates_later_requests() {
    let app = setup_test_app().await;

    let (_, body) = app
        .request(
            "POST",
            "/session",
            None,
            Some(json!({ "email": "admin@test.com", "password": "test" })),
        )
        .await;
    let token = body["accessToken"].as_str().unwrap();

    let (status, body) = app
        .request("GET", "/users/1000", Some(format!("Bearer {}", token)), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], ADMIN_ID);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = setup_test_app().await;

    let (status, body) = app
        .request(
            "POST",
            "/session",
            None,
            Some(json!({ "email": "jinny@test.com", "password": "wrong" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_with_unknown_email() {
    let app = setup_test_app().await;

    let (status, body) = app
        .request(
            "POST",
            "/session",
            None,
            Some(json!({ "email": "nobody@test.com", "password": "test" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_deleted_user_cannot_log_in() {
    let app = setup_test_app().await;

    let (status, _) = app.request_as(ADMIN_ID, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app
        .request(
            "POST",
            "/session",
            None,
            Some(json!({ "email": "jinny@test.com", "password": "test" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_missing_fields() {
    let app = setup_test_app().await;

    let (status, body) = app
        .request("POST", "/session", None, Some(json!({ "email": "jinny@test.com" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "password is required");
}
