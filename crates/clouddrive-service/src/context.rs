//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use clouddrive_entity::user::User;

/// Context for the current authenticated request.
///
/// Built by the authorization middleware after resolving the bearer token
/// to a stored user, and passed into service methods so that every
/// operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The resolved user record.
    pub user: User,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context for the given user.
    pub fn new(user: User) -> Self {
        Self {
            user,
            request_time: Utc::now(),
        }
    }

    /// Returns the acting user's ID.
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}
