//! Auth handlers — register, login, me, activity history.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use clouddrive_core::error::AppError;

use crate::error::ApiError;
use crate::dto::request::{HistoryParams, LoginRequest, RegisterRequest};
use crate::dto::response::{ActivityResponse, ClearedResponse, TokenResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .auth_service
        .register(&req.email, &req.password, req.full_name)
        .await?;

    Ok(Json(TokenResponse::from(&result)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse::from(&result)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth_service.profile(auth.context());
    Ok(Json(UserResponse::from(&user)))
}

/// GET /api/auth/history
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let entries = state
        .activity_service
        .history(auth.context(), params.limit)
        .await?;

    Ok(Json(entries.iter().map(ActivityResponse::from).collect()))
}

/// DELETE /api/auth/history
pub async fn clear_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ClearedResponse>, ApiError> {
    state.activity_service.clear(auth.context()).await?;
    Ok(Json(ClearedResponse { cleared: true }))
}
