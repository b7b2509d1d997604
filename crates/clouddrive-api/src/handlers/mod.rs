//! HTTP request handlers, grouped by domain.

pub mod admin;
pub mod auth;
pub mod file;
pub mod health;
