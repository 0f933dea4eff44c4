//! Sketch media API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use callboard_common::{Error, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::SketchesState;
use crate::domain::entities::SketchMedia;

/// Request for attaching a previously uploaded file to a sketch
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateSketchMediaRequest {
    /// File id returned by the upload endpoint
    pub file_id: Uuid,

    #[validate(length(min = 1, max = 300))]
    pub file_name: String,

    #[validate(length(min = 1, max = 100))]
    pub file_type: String,

    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Sketch media response DTO with a resolved retrieval URL
#[derive(Debug, Serialize)]
pub struct SketchMediaResponse {
    pub id: Uuid,
    pub sketch_id: Uuid,
    pub file_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// Presigned retrieval URL; null when the blob is gone
    pub file_url: Option<String>,
}

impl SketchMediaResponse {
    fn from_media(media: SketchMedia, file_url: Option<String>) -> Self {
        Self {
            id: media.id,
            sketch_id: media.sketch_id,
            file_id: media.file_id,
            file_name: media.file_name,
            file_type: media.file_type,
            width: media.width,
            height: media.height,
            created_at: media.created_at,
            file_url,
        }
    }
}

/// List media for a sketch with resolved URLs
pub async fn list_sketch_media(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
) -> Result<Json<Vec<SketchMediaResponse>>> {
    let media = state.repos.sketch_media.list_by_sketch(sketch_id).await?;

    let mut responses = Vec::with_capacity(media.len());
    for item in media {
        let url = state
            .storage
            .get_url(item.file_id)
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;
        responses.push(SketchMediaResponse::from_media(item, url));
    }

    Ok(Json(responses))
}

/// Attach an uploaded file to a sketch
pub async fn create_sketch_media(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateSketchMediaRequest>,
) -> Result<(StatusCode, Json<SketchMediaResponse>)> {
    state
        .repos
        .sketches
        .find(sketch_id)
        .await?
        .ok_or_else(|| Error::NotFound("Sketch not found".to_string()))?;

    let media = SketchMedia::new(
        sketch_id,
        req.file_id,
        req.file_name,
        req.file_type,
        req.width,
        req.height,
    );
    let created = state.repos.sketch_media.create(&media).await?;

    let url = state
        .storage
        .get_url(created.file_id)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(SketchMediaResponse::from_media(created, url)),
    ))
}

/// Delete a single media record and its blob
pub async fn delete_sketch_media(
    State(state): State<SketchesState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let media = state
        .repos
        .sketch_media
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Media not found".to_string()))?;

    if let Err(e) = state.storage.delete(media.file_id).await {
        tracing::warn!(media_id = %media.id, file_id = %media.file_id, error = %e,
            "Failed to delete media blob; removing record anyway");
    }
    state.repos.sketch_media.delete(media.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove all media for a sketch (records and blobs)
pub async fn delete_all_sketch_media(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
) -> Result<StatusCode> {
    let media = state.repos.sketch_media.list_by_sketch(sketch_id).await?;
    for item in media {
        if let Err(e) = state.storage.delete(item.file_id).await {
            tracing::warn!(media_id = %item.id, file_id = %item.file_id, error = %e,
                "Failed to delete media blob; removing record anyway");
        }
        state.repos.sketch_media.delete(item.id).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let result: std::result::Result<CreateSketchMediaRequest, _> = serde_json::from_str(
            r#"{"file_id": "00000000-0000-0000-0000-000000000000", "file_name": "a.png", "file_type": "image/png", "size": 10}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_dimensions_are_optional() {
        let media: CreateSketchMediaRequest = serde_json::from_str(
            r#"{"file_id": "00000000-0000-0000-0000-000000000000", "file_name": "a.png", "file_type": "image/png"}"#,
        )
        .unwrap();
        assert!(media.width.is_none());
        assert!(media.height.is_none());
    }
}
