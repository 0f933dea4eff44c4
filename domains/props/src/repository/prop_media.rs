//! Prop media repository

use crate::domain::entities::PropMedia;
use callboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the prop_media table, used for SELECT and RETURNING clauses.
const PROP_MEDIA_COLUMNS: &str =
    "id, prop_id, file_id, file_name, file_type, width, height, created_at";

#[derive(Clone)]
pub struct PropMediaRepository {
    pool: PgPool,
}

impl PropMediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find media record by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<PropMedia>> {
        let query = format!("SELECT {PROP_MEDIA_COLUMNS} FROM prop_media WHERE id = $1");
        let media = sqlx::query_as::<_, PropMedia>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(media)
    }

    /// List media for a prop, newest first
    pub async fn list_by_prop(&self, prop_id: Uuid) -> Result<Vec<PropMedia>> {
        let query = format!(
            "SELECT {PROP_MEDIA_COLUMNS} FROM prop_media \
             WHERE prop_id = $1 ORDER BY created_at DESC"
        );
        let media = sqlx::query_as::<_, PropMedia>(&query)
            .bind(prop_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(media)
    }

    /// Create a new media record
    pub async fn create(&self, media: &PropMedia) -> Result<PropMedia> {
        let query = format!(
            "INSERT INTO prop_media ({PROP_MEDIA_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {PROP_MEDIA_COLUMNS}"
        );
        let created = sqlx::query_as::<_, PropMedia>(&query)
            .bind(media.id)
            .bind(media.prop_id)
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
        let result = sqlx::query("DELETE FROM prop_media WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
