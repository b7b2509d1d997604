//! Admin gate for dashboard endpoints.

use clouddrive_core::error::AppError;
use clouddrive_core::result::AppResult;

use crate::extractors::AuthUser;

/// Rejects non-admin callers with a 403.
pub fn require_admin(auth: &AuthUser) -> AppResult<()> {
    if auth.is_admin() {
        Ok(())
    } else {
        Err(AppError::authorization("Admin access required"))
    }
}
