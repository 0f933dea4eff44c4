//! Cascade delete and orphan repair for sketches
//!
//! Deleting a sketch removes its characters, prop links, scripts and their
//! blobs, media and their blobs, the cover image blob, and finally the
//! sketch row. The cascade is an ordered sequence of individual deletes
//! keyed by the sketch id, not a transaction: every step is idempotent and
//! the whole sequence can be re-run after a partial failure. Blob deletion
//! failures are logged and skipped so a flaky blob store cannot strand the
//! rows (orphaned blobs are tolerated; orphaned rows are repairable).

use callboard_common::Result;
use callboard_storage::BlobStore;
use uuid::Uuid;

use super::SketchRepositories;

/// Delete a sketch and everything that hangs off it.
///
/// Returns `false` when the sketch row was already gone. Children, if any,
/// are still swept, so a re-run after a partial failure converges.
pub async fn cascade_delete_sketch(
    repos: &SketchRepositories,
    storage: &dyn BlobStore,
    sketch_id: Uuid,
) -> Result<bool> {
    let sketch = repos.sketches.find(sketch_id).await?;

    let characters = repos.characters.delete_by_sketch(sketch_id).await?;
    let links = repos.sketch_props.delete_by_sketch(sketch_id).await?;

    let scripts = repos.scripts.list_by_sketch(sketch_id).await?;
    for script in &scripts {
        delete_blob_best_effort(storage, script.file_id, "script").await;
    }
    repos.scripts.delete_by_sketch(sketch_id).await?;

    let media = repos.sketch_media.list_by_sketch(sketch_id).await?;
    for item in &media {
        delete_blob_best_effort(storage, item.file_id, "sketch media").await;
    }
    repos.sketch_media.delete_by_sketch(sketch_id).await?;

    if let Some(image_file_id) = sketch.as_ref().and_then(|s| s.image_file_id) {
        delete_blob_best_effort(storage, image_file_id, "sketch image").await;
    }

    let deleted = repos.sketches.delete(sketch_id).await?;

    tracing::info!(
        %sketch_id,
        characters,
        links,
        scripts = scripts.len(),
        media = media.len(),
        "Sketch cascade delete completed"
    );

    Ok(deleted)
}

/// Repair pass for interrupted cascades: delete child rows whose parent
/// sketch no longer exists. Safe to run at any time.
pub async fn repair_orphans(repos: &SketchRepositories) -> Result<u64> {
    let mut removed = 0;

    for table in ["characters", "sketch_props", "scripts", "sketch_media"] {
        let query = format!(
            "DELETE FROM {table} WHERE sketch_id NOT IN (SELECT id FROM sketches)"
        );
        let result = sqlx::query(&query).execute(repos.pool()).await?;
        removed += result.rows_affected();
    }

    if removed > 0 {
        tracing::warn!(removed, "Removed orphaned sketch children");
    }

    Ok(removed)
}

async fn delete_blob_best_effort(storage: &dyn BlobStore, file_id: Uuid, what: &str) {
    if let Err(e) = storage.delete(file_id).await {
        tracing::warn!(%file_id, error = %e, "Failed to delete {what} blob; continuing cascade");
    }
}
