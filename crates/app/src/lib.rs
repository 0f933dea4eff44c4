//! Callboard application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use callboard_common::{Error, Result};
use callboard_props::{repair_orphans as repair_prop_orphans, PropRepositories, PropsState};
use callboard_sketches::{
    repair_orphans as repair_sketch_orphans, SketchRepositories, SketchesState,
};
use callboard_storage::{BlobStore, BlobStoreFactory, StorageConfig, UploadTarget};
use callboard_team::{TeamRepositories, TeamState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(pool: PgPool) -> std::result::Result<Router, anyhow::Error> {
    let storage_config = StorageConfig::from_env()?;
    let storage: Arc<dyn BlobStore> = Arc::from(BlobStoreFactory::create(storage_config).await?);

    create_app_with_storage(pool, storage)
}

/// Create the application router with an explicit blob store (used by tests
/// to inject the mock)
pub fn create_app_with_storage(
    pool: PgPool,
    storage: Arc<dyn BlobStore>,
) -> std::result::Result<Router, anyhow::Error> {
    let sketches_state = SketchesState {
        repos: SketchRepositories::new(pool.clone()),
        storage: storage.clone(),
    };
    let props_state = PropsState {
        repos: PropRepositories::new(pool.clone()),
        storage: storage.clone(),
    };
    let team_state = TeamState {
        repos: TeamRepositories::new(pool.clone()),
    };
    let shared_state = SharedState {
        sketch_repos: SketchRepositories::new(pool.clone()),
        prop_repos: PropRepositories::new(pool),
        storage,
    };

    // Compose domain routers with the shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Callboard API v0.1.0" }))
        .route("/v1/uploads", post(create_upload))
        .route("/v1/maintenance/repair-orphans", post(run_repair_orphans))
        .with_state(shared_state)
        .merge(callboard_sketches::routes().with_state(sketches_state))
        .merge(callboard_props::routes().with_state(props_state))
        .merge(callboard_team::routes().with_state(team_state));

    Ok(app)
}

/// State for the shared infrastructure routes (uploads, maintenance)
#[derive(Clone)]
struct SharedState {
    sketch_repos: SketchRepositories,
    prop_repos: PropRepositories,
    storage: Arc<dyn BlobStore>,
}

/// Allocate a fresh file id and a single-use presigned upload URL
async fn create_upload(State(state): State<SharedState>) -> Result<(StatusCode, Json<UploadTarget>)> {
    let target = state
        .storage
        .generate_upload_url()
        .await
        .map_err(|e| Error::Storage(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(target)))
}

/// Sweep child rows whose parent sketch or prop is gone (recovery after an
/// interrupted cascade delete)
async fn run_repair_orphans(
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>> {
    let removed = repair_sketch_orphans(&state.sketch_repos).await?
        + repair_prop_orphans(&state.prop_repos).await?;
    Ok(Json(serde_json::json!({ "removed": removed })))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
