//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address, also the login identifier.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Optional display name.
    pub full_name: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Query parameters for the activity history listing.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryParams {
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_accepts_any_nonempty_password() {
        // No minimum length policy beyond non-emptiness.
        let req = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "pw12345".to_string(),
            full_name: None,
        };
        assert!(req.validate().is_ok());

        let empty = RegisterRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
            full_name: None,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_register_rejects_malformed_email() {
        let req = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "pw12345".to_string(),
            full_name: None,
        };
        assert!(req.validate().is_err());
    }
}
