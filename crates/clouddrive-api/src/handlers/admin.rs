//! Admin dashboard handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{AdminStatsResponse, AdminUserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AdminStatsResponse>, ApiError> {
    require_admin(&auth)?;

    let stats = state.admin_service.stats().await?;
    Ok(Json(AdminStatsResponse::from(&stats)))
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AdminUserResponse>>, ApiError> {
    require_admin(&auth)?;

    let users = state.admin_service.list_users().await?;
    Ok(Json(users.iter().map(AdminUserResponse::from).collect()))
}
