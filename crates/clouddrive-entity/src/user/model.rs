//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
///
/// Users are created at registration and never deleted in the current
/// scope. Email uniqueness is enforced by a store-level constraint, not
/// just at the application layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Email address, stored lowercased.
    pub email: String,
    /// Argon2id password hash. Never the plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Human-readable display name.
    pub full_name: Option<String>,
    /// Whether this account holds admin privileges.
    pub is_admin: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Normalized (lowercased, trimmed) email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Display name (optional).
    pub full_name: Option<String>,
}
