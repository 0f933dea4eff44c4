//! Route definitions for Team domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::team_members;
use super::middleware::TeamState;

/// Create all Team domain API routes
pub fn routes() -> Router<TeamState> {
    Router::new()
        .route(
            "/v1/team-members",
            get(team_members::list_team_members).post(team_members::create_team_member),
        )
        .route(
            "/v1/team-members/reorder",
            post(team_members::reorder_team_members),
        )
        .route(
            "/v1/team-members/{id}",
            axum::routing::patch(team_members::update_team_member)
                .delete(team_members::delete_team_member),
        )
}
