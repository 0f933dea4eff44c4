//! Domain entities for the Props domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prop acquisition status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "prop_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PropStatus {
    #[default]
    Idea,
    Planned,
    Ready,
}

impl std::fmt::Display for PropStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropStatus::Idea => write!(f, "idea"),
            PropStatus::Planned => write!(f, "planned"),
            PropStatus::Ready => write!(f, "ready"),
        }
    }
}

/// Prop entity: a physical prop in the group's inventory.
///
/// Name uniqueness is a client-side convenience only; two props may share a
/// name. `responsible_person_id` references a team member and may dangle
/// after that member is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Prop {
    pub id: Uuid,
    pub name: String,
    pub status: PropStatus,
    pub responsible_person_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prop {
    /// Create a new prop
    pub fn new(
        name: String,
        status: PropStatus,
        responsible_person_id: Option<Uuid>,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            status,
            responsible_person_id,
            notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Media file attached to a prop (reference photo, sketch, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PropMedia {
    pub id: Uuid,
    pub prop_id: Uuid,
    pub file_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl PropMedia {
    /// Create a new prop media record
    pub fn new(
        prop_id: Uuid,
        file_id: Uuid,
        file_name: String,
        file_type: String,
        width: Option<i32>,
        height: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            prop_id,
            file_id,
            file_name,
            file_type,
            width,
            height,
            created_at: Utc::now(),
        }
    }
}
