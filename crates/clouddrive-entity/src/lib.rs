//! # clouddrive-entity
//!
//! Domain entity models for Cloud Drive: users, file records, and the
//! activity ledger.

pub mod activity;
pub mod file;
pub mod user;
