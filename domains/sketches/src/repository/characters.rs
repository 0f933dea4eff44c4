//! Character repository

use crate::domain::entities::Character;
use callboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the characters table, used for SELECT and RETURNING clauses.
const CHARACTER_COLUMNS: &str = "id, sketch_id, name, assigned_to, created_at, updated_at";

#[derive(Clone)]
pub struct CharacterRepository {
    pool: PgPool,
}

impl CharacterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find character by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Character>> {
        let query = format!("SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = $1");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(character)
    }

    /// List characters for a sketch, oldest first
    pub async fn list_by_sketch(&self, sketch_id: Uuid) -> Result<Vec<Character>> {
        let query = format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters \
             WHERE sketch_id = $1 ORDER BY created_at ASC"
        );
        let characters = sqlx::query_as::<_, Character>(&query)
            .bind(sketch_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(characters)
    }

    /// Create a new character
    pub async fn create(&self, character: &Character) -> Result<Character> {
        let query = format!(
            "INSERT INTO characters ({CHARACTER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {CHARACTER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Character>(&query)
            .bind(character.id)
            .bind(character.sketch_id)
            .bind(&character.name)
            .bind(character.assigned_to)
            .bind(character.created_at)
            .bind(character.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Write back a patched character row
    pub async fn update(&self, character: &Character) -> Result<Character> {
        let query = format!(
            "UPDATE characters SET name = $2, assigned_to = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING {CHARACTER_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Character>(&query)
            .bind(character.id)
            .bind(&character.name)
            .bind(character.assigned_to)
            .fetch_one(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Delete a character
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all characters for a sketch; part of the sketch cascade
    pub async fn delete_by_sketch(&self, sketch_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM characters WHERE sketch_id = $1")
            .bind(sketch_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
