//! File handlers — list, upload, download, delete, storage usage.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use bytes::Bytes;
use uuid::Uuid;

use clouddrive_core::error::AppError;

use crate::dto::response::{
    DeletedResponse, DownloadResponse, FileSummaryResponse, StorageUsageResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/files
pub async fn list_files(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<FileSummaryResponse>>, ApiError> {
    let files = state.file_service.list(auth.context()).await?;
    Ok(Json(files.iter().map(FileSummaryResponse::from).collect()))
}

/// POST /api/files/upload — multipart upload, single `file` field
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<FileSummaryResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "file" {
            file_name = field.file_name().map(String::from);
            mime_type = field.content_type().map(String::from);
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let file_name = file_name.ok_or_else(|| AppError::validation("file is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file data is required"))?;

    let file = state
        .file_service
        .upload(auth.context(), &file_name, data, mime_type)
        .await?;

    Ok(Json(FileSummaryResponse::from(&file)))
}

/// GET /api/files/storage
pub async fn storage_usage(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StorageUsageResponse>, ApiError> {
    let total_bytes = state.file_service.storage_usage(auth.context()).await?;
    Ok(Json(StorageUsageResponse::from_bytes(total_bytes)))
}

/// GET /api/files/{id}/download
pub async fn download_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let url = state.file_service.download(auth.context(), id).await?;
    Ok(Json(DownloadResponse { url }))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = state.file_service.delete(auth.context(), id).await?;
    Ok(Json(DeletedResponse { deleted }))
}
