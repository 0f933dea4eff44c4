//! Route definitions for Props domain API

use axum::{routing::get, Router};

use super::handlers::{prop_media, props};
use super::middleware::PropsState;

/// Create prop routes
fn prop_routes() -> Router<PropsState> {
    Router::new()
        .route("/v1/props", get(props::list_props).post(props::create_prop))
        .route(
            "/v1/props/{id}",
            get(props::get_prop)
                .patch(props::update_prop)
                .delete(props::delete_prop),
        )
}

/// Create prop media routes
fn prop_media_routes() -> Router<PropsState> {
    Router::new()
        .route(
            "/v1/props/{id}/media",
            get(prop_media::list_prop_media).post(prop_media::create_prop_media),
        )
        .route(
            "/v1/prop-media/{id}",
            axum::routing::delete(prop_media::delete_prop_media),
        )
}

/// Create all Props domain API routes
pub fn routes() -> Router<PropsState> {
    Router::new().merge(prop_routes()).merge(prop_media_routes())
}
