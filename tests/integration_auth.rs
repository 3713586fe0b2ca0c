mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{SECRET, USER_ID, setup_test_app, setup_test_app_with};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;
use usergate_auth::TokenCodec;
use usergate_config::JwtConfig;
use usergate_db::UserStore;

fn sign(payload: serde_json::Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_health_check_is_public() {
    let app = setup_test_app().await;

    let (status, body) = app.request("GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let (status, body) = app.request("GET", "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/users/{id}"].is_object());
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = setup_test_app().await;
    let foreign = TokenCodec::new(&JwtConfig::new("another-secret-key-at-least-32-characters"));
    let token = foreign.issue(USER_ID).unwrap();

    let (status, body) = app
        .request("GET", "/users/1", Some(format!("Bearer {}", token)), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = setup_test_app().await;
    let past = Utc::now().timestamp() - 3600;
    let token = sign(json!({ "userId": USER_ID, "exp": past }), SECRET);

    let (status, _) = app
        .request("GET", "/users/1", Some(format!("Bearer {}", token)), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = setup_test_app().await;
    let token = app.token(USER_ID);
    let sig_start = token.rfind('.').unwrap() + 1;

    let mut bytes = token.into_bytes();
    let target = sig_start + 3;
    bytes[target] = if bytes[target] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    let (status, _) = app
        .request("GET", "/users/1", Some(format!("Bearer {}", tampered)), None)
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let app = setup_test_app().await;
    let token = app.token(USER_ID);

    let (status, _) = app
        .request("GET", "/users/1", Some(format!("Token {}", token)), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request("GET", "/users/1", Some("Bearer ".to_string()), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_is_rejected_even_on_public_route() {
    let app = setup_test_app().await;

    let (status, _) = app
        .request(
            "POST",
            "/users",
            Some("Bearer not-a-token".to_string()),
            Some(json!({
                "email": "tester@example.com",
                "name": "Tester",
                "password": "test"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(app.store.find_by_email("tester@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_token_with_configured_expiry_is_accepted() {
    let app = setup_test_app_with(JwtConfig::new(SECRET).with_expiry(3600)).await;

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
    let (status, _) = app
        .request("GET", "/users/1", Some(format!("Bearer {}", token)), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_token_for_unknown_user_has_no_roles() {
    let app = setup_test_app().await;

    // Valid signature, but user 4242 has no record and therefore no roles
    let (status, _) = app.request_as(4242, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
