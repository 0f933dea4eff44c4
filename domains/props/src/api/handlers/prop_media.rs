//! Prop media API handlers

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

use crate::api::middleware::PropsState;
use crate::domain::entities::PropMedia;

/// Request for attaching a previously uploaded file to a prop
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePropMediaRequest {
    /// File id returned by the upload endpoint
    pub file_id: Uuid,

    #[validate(length(min = 1, max = 300))]
    pub file_name: String,

    #[validate(length(min = 1, max = 100))]
    pub file_type: String,

    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Prop media response DTO with a resolved retrieval URL
#[derive(Debug, Serialize)]
pub struct PropMediaResponse {
    pub id: Uuid,
    pub prop_id: Uuid,
    pub file_id: Uuid,
    pub file_name: String,
    pub file_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: DateTime<Utc>,
    /// Presigned retrieval URL; null when the blob is gone
    pub file_url: Option<String>,
}

impl PropMediaResponse {
    fn from_media(media: PropMedia, file_url: Option<String>) -> Self {
        Self {
            id: media.id,
            prop_id: media.prop_id,
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

/// List media for a prop with resolved URLs
pub async fn list_prop_media(
    State(state): State<PropsState>,
    Path(prop_id): Path<Uuid>,
) -> Result<Json<Vec<PropMediaResponse>>> {
    let media = state.repos.prop_media.list_by_prop(prop_id).await?;

    let mut responses = Vec::with_capacity(media.len());
    for item in media {
        let url = state
            .storage
            .get_url(item.file_id)
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;
        responses.push(PropMediaResponse::from_media(item, url));
    }

    Ok(Json(responses))
}

/// Attach an uploaded file to a prop
pub async fn create_prop_media(
    State(state): State<PropsState>,
    Path(prop_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreatePropMediaRequest>,
) -> Result<(StatusCode, Json<PropMediaResponse>)> {
    // Reject attachments to props that no longer exist
    state
        .repos
        .props
        .find(prop_id)
        .await?
        .ok_or_else(|| Error::NotFound("Prop not found".to_string()))?;

    let media = PropMedia::new(
        prop_id,
        req.file_id,
        req.file_name,
        req.file_type,
        req.width,
        req.height,
    );
    let created = state.repos.prop_media.create(&media).await?;

    let url = state
        .storage
        .get_url(created.file_id)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(PropMediaResponse::from_media(created, url)),
    ))
}

/// Delete a prop media record and its blob
pub async fn delete_prop_media(
    State(state): State<PropsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let media = state
        .repos
        .prop_media
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Media not found".to_string()))?;

    if let Err(e) = state.storage.delete(media.file_id).await {
        tracing::warn!(media_id = %media.id, file_id = %media.file_id, error = %e,
            "Failed to delete media blob; removing record anyway");
    }
    state.repos.prop_media.delete(media.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
