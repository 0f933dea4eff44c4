//! AWS S3 Blob Store Implementation
//!
//! Hands out presigned PUT/GET URLs against a single bucket, with support
//! for LocalStack via a custom endpoint URL. Blob keys are
//! `blobs/{file_id}`.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::SharedCredentialsProvider;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;
use chrono::Utc;
use uuid::Uuid;

use crate::{BlobStore, StorageConfig, StorageError, UploadTarget};

/// AWS S3 blob store implementation
pub struct S3BlobStore {
    client: S3Client,
    config: StorageConfig,
}

impl S3BlobStore {
    /// Create a new S3 blob store
    pub async fn new(config: StorageConfig) -> Result<Self, StorageError> {
        let region = config
            .aws_region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string());

        let aws_config = match config.aws_endpoint_url.as_ref() {
            Some(endpoint_url) => {
                tracing::info!("Using custom AWS endpoint: {}", endpoint_url);

                // For LocalStack, use dummy credentials
                let credentials = Credentials::new(
                    "test-access-key",
                    "test-secret-key",
                    None,
                    None,
                    "localstack-storage-provider",
                );

                aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region.clone()))
                    .endpoint_url(endpoint_url)
                    .credentials_provider(SharedCredentialsProvider::new(credentials))
                    .load()
                    .await
            }
            None => {
                aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region.clone()))
                    .load()
                    .await
            }
        };

        let client = S3Client::new(&aws_config);

        Ok(Self { client, config })
    }

    fn key_for(file_id: Uuid) -> String {
        format!("blobs/{}", file_id)
    }

    fn presigning(&self) -> Result<PresigningConfig, StorageError> {
        PresigningConfig::expires_in(Duration::from_secs(self.config.url_ttl_secs))
            .map_err(|e| StorageError::Configuration(format!("Invalid presign TTL: {}", e)))
    }
}

#[async_trait::async_trait]
impl BlobStore for S3BlobStore {
    async fn generate_upload_url(&self) -> Result<UploadTarget, StorageError> {
        let file_id = Uuid::new_v4();
        let expires_at = Utc::now() + chrono::Duration::seconds(self.config.url_ttl_secs as i64);

        let presigned = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(Self::key_for(file_id))
            .presigned(self.presigning()?)
            .await
            .map_err(|e| StorageError::S3(format!("Failed to presign upload: {}", e)))?;

        tracing::debug!(%file_id, "Presigned upload URL issued");

        Ok(UploadTarget {
            file_id,
            upload_url: presigned.uri().to_string(),
            expires_at,
        })
    }

    async fn get_url(&self, file_id: Uuid) -> Result<Option<String>, StorageError> {
        // Absent blobs resolve to None, not an error
        let head = self
            .client
            .head_object()
            .bucket(&self.config.bucket)
            .key(Self::key_for(file_id))
            .send()
            .await;

        if let Err(e) = head {
            let service_err = e.into_service_error();
            if service_err.is_not_found() {
                return Ok(None);
            }
            return Err(StorageError::S3(format!(
                "Failed to check blob existence: {}",
                service_err
            )));
        }

        let presigned = self
            .client
            .get_object()
            .bucket(&self.config.bucket)
            .key(Self::key_for(file_id))
            .presigned(self.presigning()?)
            .await
            .map_err(|e| StorageError::S3(format!("Failed to presign download: {}", e)))?;

        Ok(Some(presigned.uri().to_string()))
    }

    async fn delete(&self, file_id: Uuid) -> Result<(), StorageError> {
        // S3 DeleteObject is idempotent; deleting an absent key succeeds
        self.client
            .delete_object()
            .bucket(&self.config.bucket)
            .key(Self::key_for(file_id))
            .send()
            .await
            .map_err(|e| StorageError::S3(format!("Failed to delete blob: {}", e)))?;

        tracing::debug!(%file_id, "Blob deleted");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "s3"
    }
}
