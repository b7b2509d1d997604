//! Registration and login flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use clouddrive_auth::jwt::JwtEncoder;
use clouddrive_auth::password::PasswordHasher;
use clouddrive_core::error::AppError;
use clouddrive_core::result::AppResult;
use clouddrive_database::repositories::user::UserRepository;
use clouddrive_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// A user together with a freshly issued access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The user record.
    pub user: User,
    /// Signed access token.
    pub access_token: String,
    /// Token expiration time.
    pub expires_at: DateTime<Utc>,
}

/// Handles registration, login, and profile projection.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a new user and logs them in immediately.
    ///
    /// The store-level unique constraint on email is the authoritative
    /// duplicate check; the repository maps its violation to a conflict,
    /// so a concurrent register of the same email cannot slip through.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: Option<String>,
    ) -> AppResult<AuthenticatedUser> {
        let email = normalize_email(email);

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email,
                password_hash,
                full_name,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        let (access_token, expires_at) = self.encoder.issue(user.id)?;

        Ok(AuthenticatedUser {
            user,
            access_token,
            expires_at,
        })
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown email and wrong password return the same error so callers
    /// cannot enumerate accounts by message.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let email = normalize_email(email);

        let user = match self.user_repo.find_by_email(&email).await? {
            Some(user) if self.hasher.verify_password(password, &user.password_hash)? => user,
            _ => return Err(AppError::authentication("Invalid email or password")),
        };

        info!(user_id = %user.id, "User logged in");

        let (access_token, expires_at) = self.encoder.issue(user.id)?;

        Ok(AuthenticatedUser {
            user,
            access_token,
            expires_at,
        })
    }

    /// Returns the current user's record. Pure projection, no side effect.
    pub fn profile(&self, ctx: &RequestContext) -> User {
        ctx.user.clone()
    }
}

/// Normalize an email for storage and lookup: trimmed and lowercased.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }
}
