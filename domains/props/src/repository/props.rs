//! Prop repository

use crate::domain::entities::Prop;
use callboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the props table, used for SELECT and RETURNING clauses.
const PROP_COLUMNS: &str =
    "id, name, status, responsible_person_id, notes, created_at, updated_at";

#[derive(Clone)]
pub struct PropRepository {
    pool: PgPool,
}

impl PropRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find prop by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Prop>> {
        let query = format!("SELECT {PROP_COLUMNS} FROM props WHERE id = $1");
        let prop = sqlx::query_as::<_, Prop>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(prop)
    }

    /// List all props, newest first
    pub async fn list(&self) -> Result<Vec<Prop>> {
        let query = format!("SELECT {PROP_COLUMNS} FROM props ORDER BY created_at DESC");
        let props = sqlx::query_as::<_, Prop>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(props)
    }

    /// Create a new prop. No name-uniqueness constraint: concurrent creates
    /// with the same name both succeed.
    pub async fn create(&self, prop: &Prop) -> Result<Prop> {
        let query = format!(
            "INSERT INTO props ({PROP_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROP_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Prop>(&query)
            .bind(prop.id)
            .bind(&prop.name)
            .bind(prop.status)
            .bind(prop.responsible_person_id)
            .bind(&prop.notes)
            .bind(prop.created_at)
            .bind(prop.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Write back a patched prop row
    pub async fn update(&self, prop: &Prop) -> Result<Prop> {
        let query = format!(
            "UPDATE props SET name = $2, status = $3, responsible_person_id = $4, \
             notes = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING {PROP_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Prop>(&query)
            .bind(prop.id)
            .bind(&prop.name)
            .bind(prop.status)
            .bind(prop.responsible_person_id)
            .bind(&prop.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Delete a prop row
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM props WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all sketch↔prop links referencing a prop.
    ///
    /// Part of the prop cascade; the links live in the sketches schema but
    /// share the one database.
    pub async fn delete_sketch_links(&self, prop_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sketch_props WHERE prop_id = $1")
            .bind(prop_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
