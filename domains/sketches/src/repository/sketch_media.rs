//! Sketch media repository

use crate::domain::entities::SketchMedia;
use callboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the sketch_media table, used for SELECT and RETURNING clauses.
const SKETCH_MEDIA_COLUMNS: &str =
    "id, sketch_id, file_id, file_name, file_type, width, height, created_at";

#[derive(Clone)]
pub struct SketchMediaRepository {
    pool: PgPool,
}

impl SketchMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find media record by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<SketchMedia>> {
        let query = format!("SELECT {SKETCH_MEDIA_COLUMNS} FROM sketch_media WHERE id = $1");
        let media = sqlx::query_as::<_, SketchMedia>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(media)
    }

    /// List media for a sketch, newest first
    pub async fn list_by_sketch(&self, sketch_id: Uuid) -> Result<Vec<SketchMedia>> {
        let query = format!(
            "SELECT {SKETCH_MEDIA_COLUMNS} FROM sketch_media \
             WHERE sketch_id = $1 ORDER BY created_at DESC"
        );
        let media = sqlx::query_as::<_, SketchMedia>(&query)
            .bind(sketch_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(media)
    }

    /// Create a new media record
    pub async fn create(&self, media: &SketchMedia) -> Result<SketchMedia> {
        let query = format!(
            "INSERT INTO sketch_media ({SKETCH_MEDIA_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {SKETCH_MEDIA_COLUMNS}"
        );
        let created = sqlx::query_as::<_, SketchMedia>(&query)
            .bind(media.id)
            .bind(media.sketch_id)
            .bind(media.file_id)
            .bind(&media.file_name)
            .bind(&media.file_type)
            .bind(media.width)
            .bind(media.height)
            .bind(media.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Delete a media record
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sketch_media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all media records for a sketch; part of the sketch cascade
    pub async fn delete_by_sketch(&self, sketch_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sketch_media WHERE sketch_id = $1")
            .bind(sketch_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
