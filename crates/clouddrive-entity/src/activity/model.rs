//! Activity record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::action::ActivityAction;

/// An immutable audit event in the activity ledger.
///
/// Once written an activity record is never mutated. The `file_id` link is
/// weak: when the referenced file is deleted, the store nulls the link
/// instead of cascading — history survives file deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityRecord {
    /// Unique activity identifier.
    pub id: Uuid,
    /// The acting user.
    pub user_id: Uuid,
    /// The action that was performed.
    pub action: ActivityAction,
    /// Filename snapshot captured at event time.
    pub filename: Option<String>,
    /// Weak link to the file record (nulled when the file is deleted).
    pub file_id: Option<Uuid>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new activity record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRecord {
    /// The acting user.
    pub user_id: Uuid,
    /// The action performed.
    pub action: ActivityAction,
    /// Filename snapshot.
    pub filename: Option<String>,
    /// File link (if the file still exists at append time).
    pub file_id: Option<Uuid>,
}
