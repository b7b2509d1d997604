//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use clouddrive_auth::jwt::JwtDecoder;
use clouddrive_core::config::AppConfig;
use clouddrive_database::repositories::user::UserRepository;
use clouddrive_service::activity::ActivityService;
use clouddrive_service::admin::AdminService;
use clouddrive_service::auth::AuthService;
use clouddrive_service::file::FileService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token verifier used by the auth extractor.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User repository, used to resolve token subjects to users.
    pub user_repo: Arc<UserRepository>,
    /// Registration, login, and profile.
    pub auth_service: Arc<AuthService>,
    /// File lifecycle.
    pub file_service: Arc<FileService>,
    /// Activity history.
    pub activity_service: Arc<ActivityService>,
    /// Platform-wide aggregates.
    pub admin_service: Arc<AdminService>,
}
