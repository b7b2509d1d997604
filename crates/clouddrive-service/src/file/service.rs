//! File lifecycle orchestration: list, upload, download, delete, usage.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use clouddrive_core::config::StorageConfig;
use clouddrive_core::error::AppError;
use clouddrive_core::result::AppResult;
use clouddrive_core::traits::ObjectStorage;
use clouddrive_database::repositories::activity::ActivityRepository;
use clouddrive_database::repositories::file::FileRepository;
use clouddrive_entity::activity::{ActivityAction, CreateActivityRecord};
use clouddrive_entity::file::{CreateFileRecord, FileRecord};
use clouddrive_storage::generate_object_key;

use crate::context::RequestContext;
use crate::file::validate::validate_upload;

/// Orchestrates the file lifecycle against the object store, the file
/// ledger, and the activity ledger.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File metadata repository.
    file_repo: Arc<FileRepository>,
    /// Activity ledger repository.
    activity_repo: Arc<ActivityRepository>,
    /// Object storage gateway.
    storage: Arc<dyn ObjectStorage>,
    /// Storage configuration.
    config: StorageConfig,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        activity_repo: Arc<ActivityRepository>,
        storage: Arc<dyn ObjectStorage>,
        config: StorageConfig,
    ) -> Self {
        Self {
            file_repo,
            activity_repo,
            storage,
            config,
        }
    }

    /// Lists the caller's files, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<FileRecord>> {
        self.file_repo.find_by_owner(ctx.user_id()).await
    }

    /// Uploads a file.
    ///
    /// The blob is written before the metadata row is inserted: if the
    /// object store rejects the write, no row appears (fail closed). A
    /// crash between the two steps leaves an orphaned blob, never a row
    /// pointing at missing bytes.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        filename: &str,
        data: Bytes,
        declared_mime: Option<String>,
    ) -> AppResult<FileRecord> {
        validate_upload(filename, data.len() as u64, &self.config)?;

        let object_key = generate_object_key(ctx.user_id(), filename);
        let size_bytes = data.len() as i64;
        let content_type = declared_mime
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());

        self.storage.put(&object_key, data, &content_type).await?;

        let record = self
            .file_repo
            .create(&CreateFileRecord {
                owner_id: ctx.user_id(),
                original_filename: filename.to_string(),
                object_key,
                size_bytes,
                mime_type: declared_mime,
            })
            .await?;

        self.activity_repo
            .create(&CreateActivityRecord {
                user_id: ctx.user_id(),
                action: ActivityAction::Upload,
                filename: Some(record.original_filename.clone()),
                file_id: Some(record.id),
            })
            .await?;

        info!(
            user_id = %ctx.user_id(),
            file_id = %record.id,
            size_bytes,
            "File uploaded"
        );

        Ok(record)
    }

    /// Total bytes the caller has stored. Zero when they have no files.
    pub async fn storage_usage(&self, ctx: &RequestContext) -> AppResult<i64> {
        self.file_repo.total_size_for_owner(ctx.user_id()).await
    }

    /// Issues a short-lived signed download URL for one of the caller's
    /// files.
    ///
    /// The lookup is ownership-scoped, so a file id owned by someone else
    /// reads as not found. If the backing object is missing from storage
    /// the request also reads as not found and the row is left intact for
    /// operator investigation.
    pub async fn download(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<String> {
        let file = self
            .file_repo
            .find_by_id_and_owner(file_id, ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if !self.storage.exists(&file.object_key).await? {
            warn!(
                file_id = %file.id,
                object_key = %file.object_key,
                "File record points at a missing object; row left intact"
            );
            return Err(AppError::not_found("File missing in storage"));
        }

        let url = self
            .storage
            .signed_url(&file.object_key, self.config.signed_url_ttl_seconds)
            .await?;

        self.activity_repo
            .create(&CreateActivityRecord {
                user_id: ctx.user_id(),
                action: ActivityAction::Download,
                filename: Some(file.original_filename.clone()),
                file_id: Some(file.id),
            })
            .await?;

        Ok(url)
    }

    /// Deletes one of the caller's files.
    ///
    /// Object removal is best effort: the database row is the
    /// authoritative user-visible state, so a storage failure is logged
    /// and the row still goes away. The `delete` activity and the row
    /// delete commit in one transaction, with earlier activities detached
    /// by the store's set-null rule.
    pub async fn delete(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<Uuid> {
        let file = self
            .file_repo
            .find_by_id_and_owner(file_id, ctx.user_id())
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if let Err(e) = self.storage.delete(&file.object_key).await {
            warn!(
                file_id = %file.id,
                object_key = %file.object_key,
                error = %e,
                "Failed to remove object from storage; deleting record anyway"
            );
        }

        self.file_repo.delete_with_activity(&file).await?;

        info!(user_id = %ctx.user_id(), file_id = %file.id, "File deleted");

        Ok(file.id)
    }
}
