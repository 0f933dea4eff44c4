//! Script repository
//!
//! Scripts are versioned per sketch: version numbers start at 1 and only
//! grow, so the highest version is always the latest draft.

use crate::domain::entities::Script;
use callboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the scripts table, used for SELECT and RETURNING clauses.
const SCRIPT_COLUMNS: &str = "id, sketch_id, file_id, file_name, version, created_at";

#[derive(Clone)]
pub struct ScriptRepository {
    pool: PgPool,
}

impl ScriptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all script versions for a sketch, newest first
    pub async fn list_by_sketch(&self, sketch_id: Uuid) -> Result<Vec<Script>> {
        let query = format!(
            "SELECT {SCRIPT_COLUMNS} FROM scripts \
             WHERE sketch_id = $1 ORDER BY version DESC"
        );
        let scripts = sqlx::query_as::<_, Script>(&query)
            .bind(sketch_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(scripts)
    }

    /// The latest script version for a sketch, if any
    pub async fn find_latest(&self, sketch_id: Uuid) -> Result<Option<Script>> {
        let query = format!(
            "SELECT {SCRIPT_COLUMNS} FROM scripts \
             WHERE sketch_id = $1 ORDER BY version DESC LIMIT 1"
        );
        let script = sqlx::query_as::<_, Script>(&query)
            .bind(sketch_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(script)
    }

    /// Highest version number in use for a sketch, 0 when none exist
    pub async fn max_version(&self, sketch_id: Uuid) -> Result<i32> {
        let row: (Option<i32>,) =
            sqlx::query_as("SELECT MAX(version) FROM scripts WHERE sketch_id = $1")
                .bind(sketch_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(row.0.unwrap_or(0))
    }

    /// Create a new script version
    pub async fn create(&self, script: &Script) -> Result<Script> {
        let query = format!(
            "INSERT INTO scripts ({SCRIPT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SCRIPT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Script>(&query)
            .bind(script.id)
            .bind(script.sketch_id)
            .bind(script.file_id)
            .bind(&script.file_name)
            .bind(script.version)
            .bind(script.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Delete all scripts for a sketch; part of the sketch cascade
    pub async fn delete_by_sketch(&self, sketch_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM scripts WHERE sketch_id = $1")
            .bind(sketch_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
