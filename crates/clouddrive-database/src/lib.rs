//! # clouddrive-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Cloud Drive entities.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
