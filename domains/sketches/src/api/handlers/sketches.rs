//! Sketch management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use callboard_common::{serde_helpers::double_option, Error, Result, ValidatedJson};
use callboard_ordering::plan_reorder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::SketchesState;
use crate::domain::entities::Sketch;
use crate::repository::cascade_delete_sketch;

/// Request for creating a sketch
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateSketchRequest {
    /// Sketch title (required, non-empty)
    #[validate(length(min = 1, max = 300))]
    pub title: String,

    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,
}

/// Request for patching a sketch. Only supplied fields change; explicit
/// null clears the nullable fields.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateSketchRequest {
    #[validate(length(min = 1, max = 300))]
    pub title: Option<String>,

    #[validate(range(min = 0))]
    #[serde(default, deserialize_with = "double_option")]
    pub duration_minutes: Option<Option<i32>>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub image_file_id: Option<Option<Uuid>>,
}

/// Request for reordering the full sketch list
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReorderSketchesRequest {
    /// The desired full ordering: an exact permutation of all sketch ids
    pub sketch_ids: Vec<Uuid>,
}

/// Sketch response DTO with a resolved cover image URL
#[derive(Debug, Serialize)]
pub struct SketchResponse {
    pub id: Uuid,
    pub title: String,
    pub duration_minutes: Option<i32>,
    pub description: Option<String>,
    pub image_file_id: Option<Uuid>,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Presigned retrieval URL for the cover image; null when absent
    pub image_url: Option<String>,
}

impl SketchResponse {
    fn from_sketch(sketch: Sketch, image_url: Option<String>) -> Self {
        Self {
            id: sketch.id,
            title: sketch.title,
            duration_minutes: sketch.duration_minutes,
            description: sketch.description,
            image_file_id: sketch.image_file_id,
            position: sketch.position,
            created_at: sketch.created_at,
            updated_at: sketch.updated_at,
            image_url,
        }
    }
}

async fn resolve_image_url(state: &SketchesState, sketch: &Sketch) -> Result<Option<String>> {
    match sketch.image_file_id {
        Some(file_id) => state
            .storage
            .get_url(file_id)
            .await
            .map_err(|e| Error::Storage(e.to_string())),
        None => Ok(None),
    }
}

/// List all sketches ascending by position
pub async fn list_sketches(
    State(state): State<SketchesState>,
) -> Result<Json<Vec<SketchResponse>>> {
    let sketches = state.repos.sketches.list().await?;

    let mut responses = Vec::with_capacity(sketches.len());
    for sketch in sketches {
        let image_url = resolve_image_url(&state, &sketch).await?;
        responses.push(SketchResponse::from_sketch(sketch, image_url));
    }

    Ok(Json(responses))
}

/// Get a single sketch by ID
pub async fn get_sketch(
    State(state): State<SketchesState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SketchResponse>> {
    let sketch = state
        .repos
        .sketches
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Sketch not found".to_string()))?;

    let image_url = resolve_image_url(&state, &sketch).await?;
    Ok(Json(SketchResponse::from_sketch(sketch, image_url)))
}

/// Create a sketch, appended to the end of the running order
pub async fn create_sketch(
    State(state): State<SketchesState>,
    ValidatedJson(req): ValidatedJson<CreateSketchRequest>,
) -> Result<(StatusCode, Json<SketchResponse>)> {
    let position = state.repos.sketches.allocate_position().await?;
    let sketch = Sketch::new(req.title, req.duration_minutes, position);

    let created = state.repos.sketches.create(&sketch).await?;

    tracing::info!(sketch_id = %created.id, position = created.position, "Sketch created");
    Ok((
        StatusCode::CREATED,
        Json(SketchResponse::from_sketch(created, None)),
    ))
}

/// Partially update a sketch
pub async fn update_sketch(
    State(state): State<SketchesState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateSketchRequest>,
) -> Result<Json<SketchResponse>> {
    let mut sketch = state
        .repos
        .sketches
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Sketch not found".to_string()))?;

    if let Some(title) = req.title {
        sketch.title = title;
    }
    if let Some(duration) = req.duration_minutes {
        sketch.duration_minutes = duration;
    }
    if let Some(description) = req.description {
        sketch.description = description;
    }
    if let Some(image_file_id) = req.image_file_id {
        sketch.image_file_id = image_file_id;
    }

    let updated = state.repos.sketches.update(&sketch).await?;
    let image_url = resolve_image_url(&state, &updated).await?;
    Ok(Json(SketchResponse::from_sketch(updated, image_url)))
}

/// Reorder the full sketch list
pub async fn reorder_sketches(
    State(state): State<SketchesState>,
    ValidatedJson(req): ValidatedJson<ReorderSketchesRequest>,
) -> Result<StatusCode> {
    let current = state.repos.sketches.ordered_ids().await?;
    let writes =
        plan_reorder(&current, &req.sketch_ids).map_err(|e| Error::Validation(e.to_string()))?;

    state.repos.sketches.apply_positions(&writes).await?;

    tracing::info!(count = writes.len(), "Sketches reordered");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a sketch with cascade (characters, prop links, scripts and
/// blobs, media and blobs, cover image blob)
pub async fn delete_sketch(
    State(state): State<SketchesState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let deleted = cascade_delete_sketch(&state.repos, state.storage.as_ref(), id).await?;
    if !deleted {
        return Err(Error::NotFound("Sketch not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req = CreateSketchRequest {
            title: "".to_string(),
            duration_minutes: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_rejects_position_field() {
        // Callers never pick positions; the server appends
        let result: std::result::Result<CreateSketchRequest, _> =
            serde_json::from_str(r#"{"title": "Opener", "position": 0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_rejects_negative_duration() {
        let req: UpdateSketchRequest =
            serde_json::from_str(r#"{"duration_minutes": -5}"#).unwrap();
        assert!(req.validate().is_err());

        let cleared: UpdateSketchRequest =
            serde_json::from_str(r#"{"duration_minutes": null}"#).unwrap();
        assert!(cleared.validate().is_ok());
    }

    #[test]
    fn test_update_request_null_clears_image() {
        let req: UpdateSketchRequest =
            serde_json::from_str(r#"{"image_file_id": null}"#).unwrap();
        assert_eq!(req.image_file_id, Some(None));
        assert!(req.title.is_none());
    }

    #[test]
    fn test_response_includes_image_url_field() {
        let sketch = Sketch::new("Opener".to_string(), None, 0);
        let response = SketchResponse::from_sketch(sketch, Some("https://example/img".into()));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["image_url"], "https://example/img");
        assert_eq!(json["position"], 0);
    }
}
