//! Sketch↔prop link repository

use crate::domain::entities::SketchProp;
use callboard_common::Result;
use callboard_props::Prop;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the sketch_props table, used for SELECT and RETURNING clauses.
const SKETCH_PROP_COLUMNS: &str = "id, sketch_id, prop_id, created_at";

#[derive(Clone)]
pub struct SketchPropRepository {
    pool: PgPool,
}

impl SketchPropRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List links for a sketch
    pub async fn list_by_sketch(&self, sketch_id: Uuid) -> Result<Vec<SketchProp>> {
        let query = format!(
            "SELECT {SKETCH_PROP_COLUMNS} FROM sketch_props \
             WHERE sketch_id = $1 ORDER BY created_at ASC"
        );
        let links = sqlx::query_as::<_, SketchProp>(&query)
            .bind(sketch_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(links)
    }

    /// Props attached to a sketch, in link-creation order
    pub async fn list_props_for_sketch(&self, sketch_id: Uuid) -> Result<Vec<Prop>> {
        let query = "SELECT p.id, p.name, p.status, p.responsible_person_id, p.notes, \
             p.created_at, p.updated_at \
             FROM props p \
             JOIN sketch_props sp ON sp.prop_id = p.id \
             WHERE sp.sketch_id = $1 ORDER BY sp.created_at ASC";
        let props = sqlx::query_as::<_, Prop>(query)
            .bind(sketch_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(props)
    }

    /// Find a specific link
    pub async fn find_link(&self, sketch_id: Uuid, prop_id: Uuid) -> Result<Option<SketchProp>> {
        let query = format!(
            "SELECT {SKETCH_PROP_COLUMNS} FROM sketch_props \
             WHERE sketch_id = $1 AND prop_id = $2"
        );
        let link = sqlx::query_as::<_, SketchProp>(&query)
            .bind(sketch_id)
            .bind(prop_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(link)
    }

    /// Create a link. The `(sketch_id, prop_id)` pair is unique; callers
    /// check for an existing link first to keep attach idempotent.
    pub async fn create(&self, link: &SketchProp) -> Result<SketchProp> {
        let query = format!(
            "INSERT INTO sketch_props ({SKETCH_PROP_COLUMNS}) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SKETCH_PROP_COLUMNS}"
        );
        let created = sqlx::query_as::<_, SketchProp>(&query)
            .bind(link.id)
            .bind(link.sketch_id)
            .bind(link.prop_id)
            .bind(link.created_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Delete a link by pair
    pub async fn delete_link(&self, sketch_id: Uuid, prop_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sketch_props WHERE sketch_id = $1 AND prop_id = $2")
            .bind(sketch_id)
            .bind(prop_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all links for a sketch; part of the sketch cascade
    pub async fn delete_by_sketch(&self, sketch_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sketch_props WHERE sketch_id = $1")
            .bind(sketch_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
