//! Domain entities for the Sketches domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sketch entity: one row in the manually ordered running order.
///
/// `position` is the ordering field: allocated from a high-water counter
/// on create, packed dense by a reorder, gapped after deletions and never
/// compacted. Ascending `position` is the canonical display sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sketch {
    pub id: Uuid,
    pub title: String,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
    /// Cover image blob; deleted together with the sketch
    pub image_file_id: Option<Uuid>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sketch {
    /// Create a new sketch at the given position
    pub fn new(title: String, duration_minutes: Option<i32>, position: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            duration_minutes,
            description: None,
            image_file_id: None,
            position,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A character in a sketch, optionally assigned to a team member.
///
/// The assignment is not FK-enforced: it may dangle after the member is
/// deleted and then renders as unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    pub id: Uuid,
    pub sketch_id: Uuid,
    pub name: String,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Create a new unassigned character
    pub fn new(sketch_id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            sketch_id,
            name,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A script file version for a sketch.
///
/// Versions start at 1 and increase per sketch; uploading a new script never
/// replaces an old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Script {
    pub id: Uuid,
    pub sketch_id: Uuid,
    pub file_id: Uuid,
    pub file_name: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

impl Script {
    /// Create a new script version
    pub fn new(sketch_id: Uuid, file_id: Uuid, file_name: String, version: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sketch_id,
            file_id,
            file_name,
            version,
            created_at: Utc::now(),
        }
    }
}

/// Media file attached to a sketch (reference image, recording, etc.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SketchMedia {
    pub id: Uuid,
    pub sketch_id: Uuid,
    pub file_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl SketchMedia {
    /// Create a new sketch media record
    pub fn new(
        sketch_id: Uuid,
        file_id: Uuid,
        file_name: String,
        file_type: String,
        width: Option<i32>,
        height: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sketch_id,
            file_id,
            file_name,
            file_type,
            width,
            height,
            created_at: Utc::now(),
        }
    }
}

/// Association between a sketch and a prop, unique per pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SketchProp {
    pub id: Uuid,
    pub sketch_id: Uuid,
    pub prop_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl SketchProp {
    /// Create a new sketch↔prop link
    pub fn new(sketch_id: Uuid, prop_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            sketch_id,
            prop_id,
            created_at: Utc::now(),
        }
    }
}
