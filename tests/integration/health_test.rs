//! Health and root endpoint tests.

use axum::http::StatusCode;

use crate::helpers::{get_request, send, test_app};

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(test_app(), get_request("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn root_returns_banner() {
    let (status, body) = send(test_app(), get_request("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app"], "Cloud Drive");
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = send(test_app(), get_request("/api/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
