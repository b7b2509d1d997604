//! File metadata entity.

pub mod model;

pub use model::{CreateFileRecord, FileRecord};
