//! File record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Metadata for one stored object.
///
/// The `object_key` references bytes owned by the object storage service;
/// the relational row is the authoritative user-visible state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileRecord {
    /// Unique file identifier.
    pub id: Uuid,
    /// Owning user.
    pub owner_id: Uuid,
    /// User-supplied display filename (unsanitized).
    pub original_filename: String,
    /// Opaque, globally-unique storage key. Generated by the service,
    /// never user-controlled.
    pub object_key: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Client-declared MIME type hint (not verified).
    pub mime_type: Option<String>,
    /// When the file was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFileRecord {
    /// Owning user.
    pub owner_id: Uuid,
    /// Original filename as supplied by the client.
    pub original_filename: String,
    /// Generated storage key.
    pub object_key: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Declared MIME type.
    pub mime_type: Option<String>,
}
