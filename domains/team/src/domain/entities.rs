//! Domain entities for the Team domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team member entity: one row in the manually ordered ensemble list.
///
/// `position` is the ordering field: allocated from a high-water counter
/// on create, packed dense by a reorder, gapped after deletions and never
/// compacted. Ascending `position` is the canonical display sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    /// Create a new team member at the given position
    pub fn new(name: String, position: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            position,
            created_at: now,
            updated_at: now,
        }
    }
}
