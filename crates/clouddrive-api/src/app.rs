//! Application builder — wires repositories, services, and state into an
//! Axum app and runs the server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use clouddrive_auth::jwt::{JwtDecoder, JwtEncoder};
use clouddrive_auth::password::PasswordHasher;
use clouddrive_core::config::AppConfig;
use clouddrive_core::error::AppError;
use clouddrive_core::traits::ObjectStorage;
use clouddrive_database::repositories::activity::ActivityRepository;
use clouddrive_database::repositories::file::FileRepository;
use clouddrive_database::repositories::user::UserRepository;
use clouddrive_service::activity::ActivityService;
use clouddrive_service::admin::AdminService;
use clouddrive_service::auth::AuthService;
use clouddrive_service::file::FileService;
use clouddrive_storage::S3ObjectStorage;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Assembles the application state from configuration, the database pool,
/// and an object storage gateway.
pub fn build_state(config: AppConfig, db_pool: PgPool, storage: Arc<dyn ObjectStorage>) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
    let activity_repo = Arc::new(ActivityRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&activity_repo),
        storage,
        config.storage.clone(),
    ));
    let activity_service = Arc::new(ActivityService::new(Arc::clone(&activity_repo)));
    let admin_service = Arc::new(AdminService::new(
        Arc::clone(&user_repo),
        Arc::clone(&file_repo),
        Arc::clone(&activity_repo),
    ));

    AppState {
        config: Arc::new(config),
        jwt_decoder,
        user_repo,
        auth_service,
        file_service,
        activity_service,
        admin_service,
    }
}

/// Runs the Cloud Drive server with the given configuration and database
/// pool. Blocks until Ctrl+C.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Cloud Drive server...");

    let storage: Arc<dyn ObjectStorage> = Arc::new(S3ObjectStorage::new(&config.storage.s3)?);

    match storage.health_check().await {
        Ok(true) => tracing::info!(provider = storage.provider_type(), "Object storage ready"),
        Ok(false) => tracing::warn!(
            provider = storage.provider_type(),
            "Object storage unreachable at startup; uploads will fail until it recovers"
        ),
        Err(e) => tracing::warn!(error = %e, "Object storage health check failed"),
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool, storage);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Cloud Drive server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
