//! Sketches domain state

use std::sync::Arc;

use callboard_storage::BlobStore;

use crate::SketchRepositories;

/// Application state for the Sketches domain
#[derive(Clone)]
pub struct SketchesState {
    pub repos: SketchRepositories,
    pub storage: Arc<dyn BlobStore>,
}
