//! Props domain state

use std::sync::Arc;

use callboard_storage::BlobStore;

use crate::PropRepositories;

/// Application state for the Props domain
#[derive(Clone)]
pub struct PropsState {
    pub repos: PropRepositories,
    pub storage: Arc<dyn BlobStore>,
}
