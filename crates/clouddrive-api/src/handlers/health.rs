//! Health and root handlers.

use axum::Json;
use serde_json::{Value, json};

use crate::dto::response::HealthResponse;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / — liveness banner for load balancers and the curious
pub async fn index() -> Json<Value> {
    Json(json!({ "app": "Cloud Drive", "status": "running" }))
}
