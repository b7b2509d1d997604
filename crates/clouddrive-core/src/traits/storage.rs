//! Object storage trait for the external blob store.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Gateway to the external object storage service.
///
/// The trait is defined here in `clouddrive-core` and implemented in
/// `clouddrive-storage`. Keys are opaque, service-generated strings; the
/// store keeps no knowledge of the relational metadata. Deleting a database
/// row does not guarantee the blob is gone, and vice versa — the caller
/// owns that consistency.
#[async_trait]
pub trait ObjectStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write an object under the given key with the declared content type.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()>;

    /// Delete the object at the given key. Deleting a missing key is not
    /// an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Check whether an object exists at the given key.
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Generate a time-limited signed URL granting direct read access to
    /// the object without further authorization.
    async fn signed_url(&self, key: &str, ttl_seconds: u64) -> AppResult<String>;
}
