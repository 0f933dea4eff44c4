//! Sketch↔prop link API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use callboard_common::{Error, Result};
use callboard_props::Prop;
use uuid::Uuid;

use crate::api::middleware::SketchesState;
use crate::domain::entities::SketchProp;

/// List props attached to a sketch
pub async fn list_sketch_props(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
) -> Result<Json<Vec<Prop>>> {
    let props = state
        .repos
        .sketch_props
        .list_props_for_sketch(sketch_id)
        .await?;
    Ok(Json(props))
}

/// Attach a prop to a sketch. Idempotent: attaching an already linked prop
/// returns the existing link.
pub async fn attach_prop(
    State(state): State<SketchesState>,
    Path((sketch_id, prop_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<SketchProp>)> {
    state
        .repos
        .sketches
        .find(sketch_id)
        .await?
        .ok_or_else(|| Error::NotFound("Sketch not found".to_string()))?;

    if let Some(existing) = state.repos.sketch_props.find_link(sketch_id, prop_id).await? {
        return Ok((StatusCode::OK, Json(existing)));
    }

    let link = SketchProp::new(sketch_id, prop_id);
    let created = state.repos.sketch_props.create(&link).await?;

    tracing::info!(%sketch_id, %prop_id, "Prop attached to sketch");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Detach a prop from a sketch
pub async fn detach_prop(
    State(state): State<SketchesState>,
    Path((sketch_id, prop_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode> {
    let deleted = state
        .repos
        .sketch_props
        .delete_link(sketch_id, prop_id)
        .await?;
    if !deleted {
        return Err(Error::NotFound("Prop is not attached to this sketch".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
