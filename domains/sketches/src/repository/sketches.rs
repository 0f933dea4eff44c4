//! Sketch repository

use crate::domain::entities::Sketch;
use callboard_common::Result;
use callboard_ordering::PositionWrite;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the sketches table, used for SELECT and RETURNING clauses.
const SKETCH_COLUMNS: &str = "\
    id, title, duration_minutes, description, image_file_id, \
    position, created_at, updated_at";

#[derive(Clone)]
pub struct SketchRepository {
    pool: PgPool,
}

impl SketchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find sketch by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Sketch>> {
        let query = format!("SELECT {SKETCH_COLUMNS} FROM sketches WHERE id = $1");
        let sketch = sqlx::query_as::<_, Sketch>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sketch)
    }

    /// List all sketches ascending by position
    pub async fn list(&self) -> Result<Vec<Sketch>> {
        let query = format!("SELECT {SKETCH_COLUMNS} FROM sketches ORDER BY position ASC");
        let sketches = sqlx::query_as::<_, Sketch>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(sketches)
    }

    /// Allocate the next append position from the sketches high-water
    /// counter. Positions only grow; a deleted sketch's position is never
    /// handed out again, even once the list is empty.
    pub async fn allocate_position(&self) -> Result<i64> {
        let (position,): (i64,) = sqlx::query_as(
            "INSERT INTO position_counters (scope, next_position) \
             VALUES ('sketches', 1) \
             ON CONFLICT (scope) DO UPDATE \
             SET next_position = position_counters.next_position + 1 \
             RETURNING next_position - 1",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(position)
    }

    /// Ids of all sketches ascending by position (the current sibling set)
    pub async fn ordered_ids(&self) -> Result<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> = sqlx::query_as("SELECT id FROM sketches ORDER BY position ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Create a new sketch
    pub async fn create(&self, sketch: &Sketch) -> Result<Sketch> {
        let query = format!(
            "INSERT INTO sketches ({SKETCH_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {SKETCH_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Sketch>(&query)
            .bind(sketch.id)
            .bind(&sketch.title)
            .bind(sketch.duration_minutes)
            .bind(&sketch.description)
            .bind(sketch.image_file_id)
            .bind(sketch.position)
            .bind(sketch.created_at)
            .bind(sketch.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Write back a patched sketch row (position is not touched here;
    /// reorders go through `apply_positions`)
    pub async fn update(&self, sketch: &Sketch) -> Result<Sketch> {
        let query = format!(
            "UPDATE sketches SET title = $2, duration_minutes = $3, description = $4, \
             image_file_id = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING {SKETCH_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Sketch>(&query)
            .bind(sketch.id)
            .bind(&sketch.title)
            .bind(sketch.duration_minutes)
            .bind(&sketch.description)
            .bind(sketch.image_file_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Apply reorder position writes, one row at a time.
    ///
    /// Not transactional: a failure partway through leaves a mixed order.
    /// Each write is idempotent, so re-issuing the same plan is safe.
    pub async fn apply_positions(&self, writes: &[PositionWrite]) -> Result<()> {
        for write in writes {
            sqlx::query("UPDATE sketches SET position = $2, updated_at = NOW() WHERE id = $1")
                .bind(write.id)
                .bind(write.position)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Delete a sketch row. Remaining positions are not renumbered.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sketches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
