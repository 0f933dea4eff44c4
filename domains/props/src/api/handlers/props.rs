//! Prop management API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use callboard_common::{serde_helpers::double_option, Error, Result, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::PropsState;
use crate::domain::entities::{Prop, PropStatus};

/// Request for creating a prop
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreatePropRequest {
    /// Prop name (required, non-empty). Duplicates are allowed server-side.
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    /// Acquisition status, defaults to `idea`
    #[serde(default)]
    pub status: PropStatus,

    /// Team member responsible for this prop
    pub responsible_person_id: Option<Uuid>,

    pub notes: Option<String>,
}

/// Request for patching a prop. Only supplied fields change; explicit null
/// clears `responsible_person_id` / `notes`.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdatePropRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub status: Option<PropStatus>,

    #[serde(default, deserialize_with = "double_option")]
    pub responsible_person_id: Option<Option<Uuid>>,

    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// List all props
pub async fn list_props(State(state): State<PropsState>) -> Result<Json<Vec<Prop>>> {
    let props = state.repos.props.list().await?;
    Ok(Json(props))
}

/// Get a single prop by ID
pub async fn get_prop(
    State(state): State<PropsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Prop>> {
    let prop = state
        .repos
        .props
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Prop not found".to_string()))?;

    Ok(Json(prop))
}

/// Create a prop
pub async fn create_prop(
    State(state): State<PropsState>,
    ValidatedJson(req): ValidatedJson<CreatePropRequest>,
) -> Result<(StatusCode, Json<Prop>)> {
    let prop = Prop::new(req.name, req.status, req.responsible_person_id, req.notes);
    let created = state.repos.props.create(&prop).await?;

    tracing::info!(prop_id = %created.id, "Prop created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a prop
pub async fn update_prop(
    State(state): State<PropsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdatePropRequest>,
) -> Result<Json<Prop>> {
    let mut prop = state
        .repos
        .props
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Prop not found".to_string()))?;

    if let Some(name) = req.name {
        prop.name = name;
    }
    if let Some(status) = req.status {
        prop.status = status;
    }
    if let Some(responsible) = req.responsible_person_id {
        prop.responsible_person_id = responsible;
    }
    if let Some(notes) = req.notes {
        prop.notes = notes;
    }

    let updated = state.repos.props.update(&prop).await?;
    Ok(Json(updated))
}

/// Delete a prop with cascade.
///
/// Sequence of individual deletes keyed by the prop id: media rows and
/// their blobs, sketch↔prop links, then the prop row. Not transactional;
/// re-runnable after a partial failure. Blob deletion failures are logged
/// and do not abort the cascade.
pub async fn delete_prop(
    State(state): State<PropsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let prop = state
        .repos
        .props
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Prop not found".to_string()))?;

    let media = state.repos.prop_media.list_by_prop(prop.id).await?;
    for item in media {
        if let Err(e) = state.storage.delete(item.file_id).await {
            tracing::warn!(media_id = %item.id, file_id = %item.file_id, error = %e,
                "Failed to delete prop media blob; continuing cascade");
        }
        state.repos.prop_media.delete(item.id).await?;
    }

    let unlinked = state.repos.props.delete_sketch_links(prop.id).await?;
    state.repos.props.delete(prop.id).await?;

    tracing::info!(prop_id = %prop.id, unlinked, "Prop deleted with cascade");
    Ok(StatusCode::NO_CONTENT)
}
