//! Character API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use callboard_common::{serde_helpers::double_option, Error, Result, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::SketchesState;
use crate::domain::entities::Character;

/// Request for creating a character
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateCharacterRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Request for patching a character. `assigned_to: null` clears the
/// assignment; an absent field leaves it unchanged.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateCharacterRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<Uuid>>,
}

/// List characters for a sketch
pub async fn list_characters(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
) -> Result<Json<Vec<Character>>> {
    let characters = state.repos.characters.list_by_sketch(sketch_id).await?;
    Ok(Json(characters))
}

/// Create a character in a sketch
pub async fn create_character(
    State(state): State<SketchesState>,
    Path(sketch_id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<Character>)> {
    // Reject characters for sketches that no longer exist
    state
        .repos
        .sketches
        .find(sketch_id)
        .await?
        .ok_or_else(|| Error::NotFound("Sketch not found".to_string()))?;

    let character = Character::new(sketch_id, req.name);
    let created = state.repos.characters.create(&character).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Partially update a character
pub async fn update_character(
    State(state): State<SketchesState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateCharacterRequest>,
) -> Result<Json<Character>> {
    let mut character = state
        .repos
        .characters
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Character not found".to_string()))?;

    if let Some(name) = req.name {
        character.name = name;
    }
    if let Some(assigned_to) = req.assigned_to {
        character.assigned_to = assigned_to;
    }

    let updated = state.repos.characters.update(&character).await?;
    Ok(Json(updated))
}

/// Delete a character
pub async fn delete_character(
    State(state): State<SketchesState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let deleted = state.repos.characters.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Character not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_null_clears_assignment() {
        let req: UpdateCharacterRequest =
            serde_json::from_str(r#"{"assigned_to": null}"#).unwrap();
        assert_eq!(req.assigned_to, Some(None));
    }

    #[test]
    fn test_update_request_absent_assignment_unchanged() {
        let req: UpdateCharacterRequest =
            serde_json::from_str(r#"{"name": "Waiter"}"#).unwrap();
        assert!(req.assigned_to.is_none());
        assert_eq!(req.name.as_deref(), Some("Waiter"));
    }

    #[test]
    fn test_create_request_rejects_unknown_fields() {
        let result: std::result::Result<CreateCharacterRequest, _> =
            serde_json::from_str(r#"{"name": "Waiter", "sketchId": "x"}"#);
        assert!(result.is_err());
    }
}
