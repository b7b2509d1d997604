//! File record repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clouddrive_core::error::{AppError, ErrorKind};
use clouddrive_core::result::AppResult;
use clouddrive_entity::activity::ActivityAction;
use clouddrive_entity::file::{CreateFileRecord, FileRecord};

/// Repository for file metadata rows and per-user storage accounting.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by id, scoped to its owner.
    ///
    /// The ownership scope is part of the lookup itself so that a file id
    /// belonging to another user is indistinguishable from a missing one.
    pub async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    /// List all files owned by a user, newest first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT * FROM files WHERE owner_id = $1 ORDER BY uploaded_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Insert a new file record.
    pub async fn create(&self, data: &CreateFileRecord) -> AppResult<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (owner_id, original_filename, object_key, size_bytes, mime_type) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.original_filename)
        .bind(&data.object_key)
        .bind(data.size_bytes)
        .bind(&data.mime_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    /// Delete a file row and append the `delete` activity in one transaction.
    ///
    /// The activity carries a filename snapshot and no file link; earlier
    /// activities pointing at the row are detached by the store's
    /// `ON DELETE SET NULL` rule, atomically with the delete.
    pub async fn delete_with_activity(&self, file: &FileRecord) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("INSERT INTO activities (user_id, action, filename) VALUES ($1, $2, $3)")
            .bind(file.owner_id)
            .bind(ActivityAction::Delete)
            .bind(&file.original_filename)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to record file deletion", e)
            })?;

        sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(file.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete file record", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit file deletion", e)
        })
    }

    /// Total bytes stored by one user. Zero when the user has no files.
    pub async fn total_size_for_owner(&self, owner_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(size_bytes), 0)::BIGINT FROM files WHERE owner_id = $1",
        )
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to sum storage usage", e)
            })
    }

    /// Count all files across all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))
    }

    /// Total bytes stored across all users.
    pub async fn total_size_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COALESCE(SUM(size_bytes), 0)::BIGINT FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to sum total storage", e)
            })
    }
}
