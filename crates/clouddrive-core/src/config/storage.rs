//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Maximum upload size in bytes (default 50 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Extension allow-list (lowercase, without leading dot). Empty means
    /// every extension is accepted.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
    /// TTL for signed download URLs in seconds.
    #[serde(default = "default_signed_url_ttl")]
    pub signed_url_ttl_seconds: u64,
    /// S3-compatible object storage configuration.
    #[serde(default)]
    pub s3: S3Config,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_upload_size_bytes: default_max_upload(),
            allowed_extensions: Vec::new(),
            signed_url_ttl_seconds: default_signed_url_ttl(),
            s3: S3Config::default(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct S3Config {
    /// S3 endpoint URL (leave empty for AWS; set for MinIO and friends).
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Bucket name holding all user objects.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
}

fn default_max_upload() -> u64 {
    50 * 1024 * 1024
}

fn default_signed_url_ttl() -> u64 {
    60
}

fn default_region() -> String {
    "us-east-1".to_string()
}
