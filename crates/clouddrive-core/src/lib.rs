//! # clouddrive-core
//!
//! Core crate for Cloud Drive. Contains configuration schemas, the object
//! storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Cloud Drive crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
