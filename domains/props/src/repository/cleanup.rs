//! Orphan repair for props
//!
//! A prop delete removes its media rows and blobs and its sketch links one
//! statement at a time, not in a transaction. An interrupted run can leave
//! `prop_media` or `sketch_props` rows pointing at a prop that no longer
//! exists. This pass sweeps them; stray blobs are tolerated.

use callboard_common::Result;

use super::PropRepositories;

/// Repair pass for interrupted cascades: delete child rows whose parent
/// prop no longer exists. Safe to run at any time.
pub async fn repair_orphans(repos: &PropRepositories) -> Result<u64> {
    let mut removed = 0;

    for table in ["prop_media", "sketch_props"] {
        let query = format!("DELETE FROM {table} WHERE prop_id NOT IN (SELECT id FROM props)");
        let result = sqlx::query(&query).execute(repos.pool()).await?;
        removed += result.rows_affected();
    }

    if removed > 0 {
        tracing::warn!(removed, "Removed orphaned prop children");
    }

    Ok(removed)
}
