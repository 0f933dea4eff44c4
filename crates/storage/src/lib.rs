//! Callboard Blob Storage
//!
//! Provides file storage for scripts and media with support for:
//! - AWS S3 integration with presigned upload/download URLs
//! - Mock blob store for testing and development
//! - LocalStack integration for local E2E testing
//!
//! Clients never stream file bytes through the API: an upload is a fresh
//! file id plus a single-use presigned PUT URL, and reads resolve a file id
//! to a presigned GET URL (or nothing, when the blob is gone).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod mock;
pub mod s3;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("AWS S3 error: {0}")]
    S3(String),
}

/// A freshly allocated upload slot: the file id to reference in later
/// records, and the URL the client PUTs the bytes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadTarget {
    pub file_id: Uuid,
    pub upload_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Blob store configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider (s3, mock)
    pub provider: String,
    /// Bucket holding all callboard blobs
    pub bucket: String,
    /// AWS region
    pub aws_region: Option<String>,
    /// AWS endpoint URL (for LocalStack)
    pub aws_endpoint_url: Option<String>,
    /// Presigned URL lifetime in seconds
    pub url_ttl_secs: u64,
}

impl StorageConfig {
    /// Create storage config from environment variables
    pub fn from_env() -> Result<Self, StorageError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let bucket = std::env::var("S3_BUCKET_MEDIA").unwrap_or_else(|_| "callboard-media".to_string());
        let aws_region = std::env::var("AWS_REGION").ok();
        let aws_endpoint_url = std::env::var("AWS_ENDPOINT_URL").ok();

        let url_ttl_secs = std::env::var("STORAGE_URL_TTL_SECS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);

        Ok(Self {
            provider,
            bucket,
            aws_region,
            aws_endpoint_url,
            url_ttl_secs,
        })
    }
}

/// Blob store trait for different implementations
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Allocate a file id and a single-use presigned upload URL for it
    async fn generate_upload_url(&self) -> Result<UploadTarget, StorageError>;

    /// Resolve a file id to a retrieval URL; `None` when the blob is absent
    async fn get_url(&self, file_id: Uuid) -> Result<Option<String>, StorageError>;

    /// Delete a blob. Deleting an absent blob is not an error.
    async fn delete(&self, file_id: Uuid) -> Result<(), StorageError>;

    /// Provider name for logging
    fn provider_name(&self) -> &'static str;
}

/// Blob store factory
pub struct BlobStoreFactory;

impl BlobStoreFactory {
    /// Create a blob store based on configuration
    pub async fn create(config: StorageConfig) -> Result<Box<dyn BlobStore>, StorageError> {
        match config.provider.as_str() {
            "s3" | "aws-s3" => {
                tracing::info!("Creating S3 blob store");
                let store = s3::S3BlobStore::new(config).await?;
                Ok(Box::new(store))
            }
            "mock" => {
                tracing::info!("Creating mock blob store");
                Ok(Box::new(mock::MockBlobStore::new()))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: s3, mock",
                provider
            ))),
        }
    }
}
