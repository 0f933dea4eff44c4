//! Script API handlers
//!
//! Scripts are append-only versions per sketch: uploading a new script file
//! creates the next version, never replacing earlier ones.

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
use crate::domain::entities::Script;

/// Request for registering an uploaded script file as the next version
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateScriptRequest {
    /// File id returned by the upload endpoint
    pub file_id: Uuid,

    #[validate(length(min = 1, max = 300))]
    pub file_name: String,
}

/// Script response DTO with a resolved retrieval URL
#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub id: Uuid,
    pub sketch_id: Uuid,
    pub file_id: Uuid,
    pub file_name: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    /// Presigned retrieval URL; null when the blob is gone
    pub file_url: Option<String>,
}

impl ScriptResponse {
    fn from_script(script: Script, file_url: Option<String>) -> Self {
        Self {
            id: script.id,
            sketch_id: script.sketch_id,
            file_id: script.file_id,
            file_name: script.file_name,
            version: script.version,
            created_at: script.created_at,
            file_url,
        }
    }
}

async fn resolve(state: &SketchesState, script: Script) -> Result<ScriptResponse> {
    let url = state
        .storage
        .get_url(script.file_id)
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;
    Ok(ScriptResponse::from_script(script, url))
}

/// List all script versions for a sketch, newest first
pub async fn list_scripts(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
) -> Result<Json<Vec<ScriptResponse>>> {
    let scripts = state.repos.scripts.list_by_sketch(sketch_id).await?;

    let mut responses = Vec::with_capacity(scripts.len());
    for script in scripts {
        responses.push(resolve(&state, script).await?);
    }

    Ok(Json(responses))
}

/// Get the latest script version for a sketch
pub async fn get_latest_script(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
) -> Result<Json<ScriptResponse>> {
    let script = state
        .repos
        .scripts
        .find_latest(sketch_id)
        .await?
        .ok_or_else(|| Error::NotFound("No script uploaded for this sketch".to_string()))?;

    Ok(Json(resolve(&state, script).await?))
}

/// Register an uploaded file as the next script version
pub async fn create_script(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateScriptRequest>,
) -> Result<(StatusCode, Json<ScriptResponse>)> {
    state
        .repos
        .sketches
        .find(sketch_id)
        .await?
        .ok_or_else(|| Error::NotFound("Sketch not found".to_string()))?;

    // Read current versions first; the new script becomes max + 1
    let next_version = state.repos.scripts.max_version(sketch_id).await? + 1;
    let script = Script::new(sketch_id, req.file_id, req.file_name, next_version);
    let created = state.repos.scripts.create(&script).await?;

    tracing::info!(script_id = %created.id, %sketch_id, version = created.version,
        "Script version registered");

    let response = resolve(&state, created).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
