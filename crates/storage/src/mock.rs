//! Mock Blob Store Implementation
//!
//! In-memory blob registry for testing without external dependencies.
//! Upload targets register their file id immediately, as if the client
//! completed the PUT, so handler tests can round-trip file references.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::{BlobStore, StorageError, UploadTarget};

/// Mock blob store for testing
#[derive(Debug, Clone, Default)]
pub struct MockBlobStore {
    blobs: Arc<Mutex<HashSet<Uuid>>>,
    deleted: Arc<Mutex<Vec<Uuid>>>,
}

impl MockBlobStore {
    /// Create a new mock blob store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a blob as uploaded (for seeding test fixtures)
    pub fn insert_blob(&self, file_id: Uuid) {
        self.blobs.lock().unwrap().insert(file_id);
    }

    /// Whether a blob currently exists
    pub fn contains(&self, file_id: Uuid) -> bool {
        self.blobs.lock().unwrap().contains(&file_id)
    }

    /// Number of live blobs
    pub fn blob_count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }

    /// File ids deleted so far, in deletion order
    pub fn deleted_ids(&self) -> Vec<Uuid> {
        self.deleted.lock().unwrap().clone()
    }

    /// Clear all state
    pub fn clear(&self) {
        self.blobs.lock().unwrap().clear();
        self.deleted.lock().unwrap().clear();
    }
}

#[async_trait::async_trait]
impl BlobStore for MockBlobStore {
    async fn generate_upload_url(&self) -> Result<UploadTarget, StorageError> {
        let file_id = Uuid::new_v4();
        self.blobs.lock().unwrap().insert(file_id);

        tracing::debug!(%file_id, "Mock upload target issued");

        Ok(UploadTarget {
            file_id,
            upload_url: format!("mock://upload/{}", file_id),
            expires_at: Utc::now() + chrono::Duration::minutes(15),
        })
    }

    async fn get_url(&self, file_id: Uuid) -> Result<Option<String>, StorageError> {
        if self.blobs.lock().unwrap().contains(&file_id) {
            Ok(Some(format!("mock://blob/{}", file_id)))
        } else {
            Ok(None)
        }
    }

    async fn delete(&self, file_id: Uuid) -> Result<(), StorageError> {
        self.blobs.lock().unwrap().remove(&file_id);
        self.deleted.lock().unwrap().push(file_id);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
