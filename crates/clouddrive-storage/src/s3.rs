//! S3-compatible object storage gateway.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use clouddrive_core::config::S3Config;
use clouddrive_core::error::{AppError, ErrorKind};
use clouddrive_core::result::AppResult;
use clouddrive_core::traits::ObjectStorage;

/// Object storage gateway backed by an S3-compatible service.
#[derive(Debug, Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
}

impl S3ObjectStorage {
    /// Create a new gateway from configuration.
    ///
    /// Static credentials and a bucket name are required; an endpoint URL
    /// is set only for non-AWS services such as MinIO.
    pub fn new(config: &S3Config) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("storage.s3.bucket must be set"));
        }
        if config.access_key.is_empty() || config.secret_key.is_empty() {
            return Err(AppError::configuration(
                "storage.s3.access_key and storage.s3.secret_key must be set",
            ));
        }

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "clouddrive-config",
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .force_path_style(true);

        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(&config.endpoint);
        }

        tracing::info!(
            endpoint = %config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing S3 object storage gateway"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self
            .client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!(error = %e, "S3 health check failed");
                Ok(false)
            }
        }
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to store object '{key}'"),
                    e,
                )
            })?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object '{key}'"),
                    e,
                )
            })?;

        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) => {
                if e.as_service_error().map(|s| s.is_not_found()) == Some(true) {
                    Ok(false)
                } else {
                    Err(AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to check object '{key}'"),
                        e,
                    ))
                }
            }
        }
    }

    async fn signed_url(&self, key: &str, ttl_seconds: u64) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(Duration::from_secs(ttl_seconds))
            .map_err(|e| AppError::internal(format!("Invalid presigning TTL: {e}")))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to sign URL for object '{key}'"),
                    e,
                )
            })?;

        Ok(presigned.uri().to_string())
    }
}
