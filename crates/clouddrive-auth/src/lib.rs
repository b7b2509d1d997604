//! # clouddrive-auth
//!
//! Token issuance/verification and password hashing for Cloud Drive.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
