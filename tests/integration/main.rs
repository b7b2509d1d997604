//! Integration tests that exercise the HTTP surface in-process.
//!
//! The boundary tests build the full router over a lazily-connected pool
//! and cover routes that reject before any backend call. The flow tests
//! run against a real migrated database (via `#[sqlx::test]`) with an
//! in-memory object store standing in for S3.

mod helpers;

mod auth_test;
mod file_flow_test;
mod health_test;
