//! Route definitions for the Cloud Drive HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the configured file size
/// ceiling, so the body limit rejects only genuinely oversized uploads.
const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit =
        (state.config.storage.max_upload_size_bytes + MULTIPART_OVERHEAD_BYTES) as usize;
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(file_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::index))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me, activity history
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/history", get(handlers::auth::history))
        .route("/auth/history/clear", delete(handlers::auth::clear_history))
}

/// File listing, upload, download, delete, storage usage
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", get(handlers::file::list_files))
        .route("/files/upload", post(handlers::file::upload_file))
        .route("/files/storage", get(handlers::file::storage_usage))
        .route("/files/{id}/download", get(handlers::file::download_file))
        .route("/files/{id}", delete(handlers::file::delete_file))
}

/// Admin dashboard endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(handlers::admin::stats))
        .route("/admin/users", get(handlers::admin::list_users))
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
