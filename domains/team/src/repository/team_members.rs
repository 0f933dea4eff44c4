//! Team member repository

use crate::domain::entities::TeamMember;
use callboard_common::Result;
use callboard_ordering::PositionWrite;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the team_members table, used for SELECT and RETURNING clauses.
const TEAM_MEMBER_COLUMNS: &str = "id, name, position, created_at, updated_at";

#[derive(Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find team member by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<TeamMember>> {
        let query = format!("SELECT {TEAM_MEMBER_COLUMNS} FROM team_members WHERE id = $1");
        let member = sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(member)
    }

    /// List all team members ascending by position
    pub async fn list(&self) -> Result<Vec<TeamMember>> {
        let query = format!("SELECT {TEAM_MEMBER_COLUMNS} FROM team_members ORDER BY position ASC");
        let members = sqlx::query_as::<_, TeamMember>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(members)
    }

    /// Allocate the next append position from the team-members high-water
    /// counter. Positions only grow; a deleted member's position is never
    /// handed out again, even once the list is empty.
    pub async fn allocate_position(&self) -> Result<i64> {
        let (position,): (i64,) = sqlx::query_as(
            "INSERT INTO position_counters (scope, next_position) \
             VALUES ('team_members', 1) \
             ON CONFLICT (scope) DO UPDATE \
             SET next_position = position_counters.next_position + 1 \
             RETURNING next_position - 1",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(position)
    }

    /// Ids of all team members ascending by position (the current sibling set)
    pub async fn ordered_ids(&self) -> Result<Vec<Uuid>> {
        let rows: Vec<(Uuid,)> =
            sqlx::query_as("SELECT id FROM team_members ORDER BY position ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Create a new team member
    pub async fn create(&self, member: &TeamMember) -> Result<TeamMember> {
        let query = format!(
            "INSERT INTO team_members ({TEAM_MEMBER_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TEAM_MEMBER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, TeamMember>(&query)
            .bind(member.id)
            .bind(&member.name)
            .bind(member.position)
            .bind(member.created_at)
            .bind(member.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    /// Rename a team member
    pub async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<TeamMember>> {
        let query = format!(
            "UPDATE team_members SET name = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {TEAM_MEMBER_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(updated)
    }

    /// Apply reorder position writes, one row at a time.
    ///
    /// Not transactional: a failure partway through leaves a mixed order.
    /// Each write is idempotent, so re-issuing the same plan is safe.
    pub async fn apply_positions(&self, writes: &[PositionWrite]) -> Result<()> {
        for write in writes {
            sqlx::query("UPDATE team_members SET position = $2, updated_at = NOW() WHERE id = $1")
                .bind(write.id)
                .bind(write.position)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }

    /// Delete a team member. Remaining positions are not renumbered.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
