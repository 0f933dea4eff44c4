//! Team member API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use callboard_common::{Error, Result, ValidatedJson};
use callboard_ordering::plan_reorder;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::TeamState;
use crate::domain::entities::TeamMember;

/// Request for creating a team member
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTeamMemberRequest {
    /// Display name (required, non-empty)
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Request for renaming a team member
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateTeamMemberRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
}

/// Request for reordering the full member list
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ReorderTeamMembersRequest {
    /// The desired full ordering: an exact permutation of all member ids
    pub member_ids: Vec<Uuid>,
}

/// List all team members ascending by position
pub async fn list_team_members(
    State(state): State<TeamState>,
) -> Result<Json<Vec<TeamMember>>> {
    let members = state.repos.team_members.list().await?;
    Ok(Json(members))
}

/// Create a team member, appended to the end of the list
pub async fn create_team_member(
    State(state): State<TeamState>,
    ValidatedJson(req): ValidatedJson<CreateTeamMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>)> {
    let position = state.repos.team_members.allocate_position().await?;
    let member = TeamMember::new(req.name, position);

    let created = state.repos.team_members.create(&member).await?;

    tracing::info!(member_id = %created.id, position = created.position, "Team member created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Rename a team member
pub async fn update_team_member(
    State(state): State<TeamState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateTeamMemberRequest>,
) -> Result<Json<TeamMember>> {
    let updated = state
        .repos
        .team_members
        .update_name(id, &req.name)
        .await?
        .ok_or_else(|| Error::NotFound("Team member not found".to_string()))?;

    Ok(Json(updated))
}

/// Reorder the full member list
pub async fn reorder_team_members(
    State(state): State<TeamState>,
    ValidatedJson(req): ValidatedJson<ReorderTeamMembersRequest>,
) -> Result<StatusCode> {
    let current = state.repos.team_members.ordered_ids().await?;
    let writes = plan_reorder(&current, &req.member_ids)
        .map_err(|e| Error::Validation(e.to_string()))?;

    state.repos.team_members.apply_positions(&writes).await?;

    tracing::info!(count = writes.len(), "Team members reordered");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a team member.
///
/// Positions of remaining members are not renumbered; character assignments
/// referencing the member are left dangling and render as unassigned.
pub async fn delete_team_member(
    State(state): State<TeamState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let deleted = state.repos.team_members.delete(id).await?;
    if !deleted {
        return Err(Error::NotFound("Team member not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
