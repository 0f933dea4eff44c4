//! Route definitions for Sketches domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{characters, scripts, sketch_media, sketch_props, sketches};
use super::middleware::SketchesState;

/// Create sketch routes
fn sketch_routes() -> Router<SketchesState> {
    Router::new()
        .route(
            "/v1/sketches",
            get(sketches::list_sketches).post(sketches::create_sketch),
        )
        .route("/v1/sketches/reorder", post(sketches::reorder_sketches))
        .route(
            "/v1/sketches/{id}",
            get(sketches::get_sketch)
                .patch(sketches::update_sketch)
                .delete(sketches::delete_sketch),
        )
}

/// Create character routes
fn character_routes() -> Router<SketchesState> {
    Router::new()
        .route(
            "/v1/sketches/{id}/characters",
            get(characters::list_characters).post(characters::create_character),
        )
        .route(
            "/v1/characters/{id}",
            axum::routing::patch(characters::update_character)
                .delete(characters::delete_character),
        )
}

/// Create script routes
fn script_routes() -> Router<SketchesState> {
    Router::new()
        .route(
            "/v1/sketches/{id}/scripts",
            get(scripts::list_scripts).post(scripts::create_script),
        )
        .route(
            "/v1/sketches/{id}/scripts/latest",
            get(scripts::get_latest_script),
        )
}

/// Create sketch media routes
fn sketch_media_routes() -> Router<SketchesState> {
    Router::new()
        .route(
            "/v1/sketches/{id}/media",
            get(sketch_media::list_sketch_media)
                .post(sketch_media::create_sketch_media)
                .delete(sketch_media::delete_all_sketch_media),
        )
        .route("/v1/media/{id}", delete(sketch_media::delete_sketch_media))
}

/// Create sketch↔prop link routes
fn sketch_prop_routes() -> Router<SketchesState> {
    Router::new()
        .route("/v1/sketches/{id}/props", get(sketch_props::list_sketch_props))
        .route(
            "/v1/sketches/{id}/props/{prop_id}",
            axum::routing::put(sketch_props::attach_prop).delete(sketch_props::detach_prop),
        )
}

/// Create all Sketches domain API routes
pub fn routes() -> Router<SketchesState> {
    Router::new()
        .merge(sketch_routes())
        .merge(character_routes())
        .merge(script_routes())
        .merge(sketch_media_routes())
        .merge(sketch_prop_routes())
}
