//! # clouddrive-service
//!
//! Business logic services for Cloud Drive. Each service orchestrates
//! repositories and the object storage gateway; none of them hold any
//! cross-request state.

pub mod activity;
pub mod admin;
pub mod auth;
pub mod context;
pub mod file;

pub use context::RequestContext;
