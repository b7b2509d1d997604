//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clouddrive_entity::activity::ActivityRecord;
use clouddrive_entity::file::FileRecord;
use clouddrive_entity::user::User;
use clouddrive_service::admin::PlatformStats;
use clouddrive_service::auth::AuthenticatedUser;

/// Public projection of a user, safe for any authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            is_admin: user.is_admin,
        }
    }
}

/// User projection for the admin listing, with the signup time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for AdminUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}

/// Access token issued on register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<&AuthenticatedUser> for TokenResponse {
    fn from(auth: &AuthenticatedUser) -> Self {
        Self {
            access_token: auth.access_token.clone(),
            token_type: "bearer".to_string(),
            expires_at: auth.expires_at,
            user: UserResponse::from(&auth.user),
        }
    }
}

/// One stored file, as shown in listings and upload responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummaryResponse {
    pub id: Uuid,
    pub original_filename: String,
    pub size_bytes: i64,
    pub mime_type: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&FileRecord> for FileSummaryResponse {
    fn from(file: &FileRecord) -> Self {
        Self {
            id: file.id,
            original_filename: file.original_filename.clone(),
            size_bytes: file.size_bytes,
            mime_type: file.mime_type.clone(),
            uploaded_at: file.uploaded_at,
        }
    }
}

/// Caller's storage footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageUsageResponse {
    pub total_bytes: i64,
    pub total_mb: f64,
}

impl StorageUsageResponse {
    pub fn from_bytes(total_bytes: i64) -> Self {
        Self {
            total_bytes,
            total_mb: bytes_to_mb(total_bytes),
        }
    }
}

/// One activity ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub action: String,
    pub filename: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&ActivityRecord> for ActivityResponse {
    fn from(activity: &ActivityRecord) -> Self {
        Self {
            id: activity.id,
            action: activity.action.to_string(),
            filename: activity.filename.clone(),
            created_at: activity.created_at,
        }
    }
}

/// Signed download URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadResponse {
    pub url: String,
}

/// Acknowledgement of a file delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: Uuid,
}

/// Acknowledgement of a history wipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedResponse {
    pub cleared: bool,
}

/// Platform counters for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminStatsResponse {
    pub total_users: i64,
    pub total_files: i64,
    pub total_storage_bytes: i64,
    pub total_storage_mb: f64,
    pub activity_count: i64,
}

impl From<&PlatformStats> for AdminStatsResponse {
    fn from(stats: &PlatformStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_files: stats.total_files,
            total_storage_bytes: stats.total_storage_bytes,
            total_storage_mb: bytes_to_mb(stats.total_storage_bytes),
            activity_count: stats.activity_count,
        }
    }
}

/// Service health report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Convert a byte count to megabytes, rounded to two decimal places.
pub fn bytes_to_mb(bytes: i64) -> f64 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_mb_rounds_to_two_places() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
        assert_eq!(bytes_to_mb(1_500_000), 1.43);
        assert_eq!(bytes_to_mb(5 * 1024 * 1024 + 512 * 1024), 5.5);
    }

    #[test]
    fn test_admin_stats_field_names() {
        let stats = PlatformStats {
            total_users: 2,
            total_files: 3,
            total_storage_bytes: 1024 * 1024,
            activity_count: 7,
        };
        let body = serde_json::to_value(AdminStatsResponse::from(&stats)).unwrap();
        assert_eq!(body["activity_count"], 7);
        assert_eq!(body["total_storage_mb"], 1.0);
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            password_hash: "secret".to_string(),
            full_name: None,
            is_admin: false,
            created_at: Utc::now(),
        };
        let body = serde_json::to_string(&UserResponse::from(&user)).unwrap();
        assert!(!body.contains("secret"));
        assert!(body.contains("a@example.com"));
    }
}
