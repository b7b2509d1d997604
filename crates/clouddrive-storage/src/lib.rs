//! # clouddrive-storage
//!
//! Implementation of the [`clouddrive_core::traits::ObjectStorage`] gateway
//! against an S3-compatible object store, plus opaque object-key generation.

pub mod key;
pub mod s3;

pub use key::generate_object_key;
pub use s3::S3ObjectStorage;
