//! Platform-wide aggregates for the admin dashboard.

use std::sync::Arc;

use clouddrive_core::result::AppResult;
use clouddrive_database::repositories::activity::ActivityRepository;
use clouddrive_database::repositories::file::FileRepository;
use clouddrive_database::repositories::user::UserRepository;
use clouddrive_entity::user::User;

/// Platform-wide counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_users: i64,
    pub total_files: i64,
    pub total_storage_bytes: i64,
    pub activity_count: i64,
}

/// Read-only aggregates over the whole platform. Authorization is the
/// caller's job; every method here assumes an admin.
#[derive(Debug, Clone)]
pub struct AdminService {
    user_repo: Arc<UserRepository>,
    file_repo: Arc<FileRepository>,
    activity_repo: Arc<ActivityRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        file_repo: Arc<FileRepository>,
        activity_repo: Arc<ActivityRepository>,
    ) -> Self {
        Self {
            user_repo,
            file_repo,
            activity_repo,
        }
    }

    /// Current platform counters.
    pub async fn stats(&self) -> AppResult<PlatformStats> {
        let total_users = self.user_repo.count().await?;
        let total_files = self.file_repo.count().await?;
        let total_storage_bytes = self.file_repo.total_size_all().await?;
        let activity_count = self.activity_repo.count().await?;

        Ok(PlatformStats {
            total_users,
            total_files,
            total_storage_bytes,
            activity_count,
        })
    }

    /// Every registered user, newest first.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all_newest_first().await
    }
}
