//! Activity ledger repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use clouddrive_core::error::{AppError, ErrorKind};
use clouddrive_core::result::AppResult;
use clouddrive_entity::activity::{ActivityRecord, CreateActivityRecord};

/// Repository for the append-only activity ledger.
#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an activity record. Records are never updated afterwards.
    pub async fn create(&self, data: &CreateActivityRecord) -> AppResult<ActivityRecord> {
        sqlx::query_as::<_, ActivityRecord>(
            "INSERT INTO activities (user_id, action, filename, file_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.action)
        .bind(&data.filename)
        .bind(data.file_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append activity", e))
    }

    /// List a user's most recent activities, newest first, bounded by limit.
    pub async fn find_recent_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<ActivityRecord>> {
        sqlx::query_as::<_, ActivityRecord>(
            "SELECT * FROM activities WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))
    }

    /// Delete all of a user's activity rows. Other users' rows and all
    /// file records are untouched.
    pub async fn clear_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM activities WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear activities", e)
            })?;

        Ok(result.rows_affected())
    }

    /// Count all activity records across all users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count activities", e)
            })
    }
}
