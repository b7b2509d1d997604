//! File lifecycle orchestration.

pub mod service;
pub mod validate;

pub use service::FileService;
