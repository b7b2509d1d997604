//! Authentication boundary tests — everything here must be rejected
//! before any backend call is made.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::helpers::{get_request, json_request, send, test_app};

#[tokio::test]
async fn files_require_a_token() {
    let (status, body) = send(test_app(), get_request("/api/files")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Missing Authorization header");
}

#[tokio::test]
async fn malformed_authorization_header_is_rejected() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/files")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid Authorization header format");
}

#[tokio::test]
async fn garbage_bearer_token_is_rejected() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", "Bearer not.a.jwt")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let (status, _) = send(test_app(), get_request("/api/admin/stats")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let request = json_request(
        "POST",
        "/api/auth/register",
        json!({ "email": "not-an-email", "password": "hunter2hunter2" }),
    );

    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}
