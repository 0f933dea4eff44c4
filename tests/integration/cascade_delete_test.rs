//! Sketch cascade delete tests
//!
//! A sketch delete removes its characters, prop links, scripts, media, and
//! their blobs, one child at a time, and leaves shared props alone. The
//! orphan repair endpoint sweeps children left behind by an interrupted run.
//!
//! All tests here are ignored by default; run with a database:
//!   TEST_DATABASE_URL=postgres://... cargo test -- --ignored

mod common;

use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

use crate::common::{id_of, TestApp};

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_cascade_delete_removes_children_and_blobs() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    // A sketch with a cover image, a character, one script, and one media item
    let (_, sketch) = app.post("/v1/sketches", json!({"title": "Opener"})).await;
    let sketch_id = id_of(&sketch);

    let image_file = app.upload_file().await;
    let (status, _) = app
        .patch(
            &format!("/v1/sketches/{sketch_id}"),
            json!({"image_file_id": image_file}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/characters"),
            json!({"name": "The Inspector"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let script_file = app.upload_file().await;
    let (status, _) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/scripts"),
            json!({"file_id": script_file, "file_name": "opener-v1.pdf"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let media_file = app.upload_file().await;
    let (status, _) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/media"),
            json!({
                "file_id": media_file,
                "file_name": "rehearsal.jpg",
                "file_type": "image/jpeg",
                "width": 1920,
                "height": 1080
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // A prop shared with the rest of the show, attached to this sketch
    let (_, prop) = app.post("/v1/props", json!({"name": "Rubber chicken"})).await;
    let prop_id = id_of(&prop);
    let (status, _) = app
        .put(&format!("/v1/sketches/{sketch_id}/props/{prop_id}"))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Delete the sketch
    let (status, _) = app.delete(&format!("/v1/sketches/{sketch_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&format!("/v1/sketches/{sketch_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for table in ["characters", "scripts", "sketch_media", "sketch_props"] {
        let count = app.count(table, Some(("sketch_id", sketch_id))).await.unwrap();
        assert_eq!(count, 0, "{table} rows should be gone");
    }

    // The prop itself survives; only the link is removed
    let (status, _) = app.get(&format!("/v1/props/{prop_id}")).await;
    assert_eq!(status, StatusCode::OK);

    // Blobs for the script, media, and cover image are deleted
    let deleted = app.storage.deleted_ids();
    for file_id in [script_file, media_file, image_file] {
        assert!(deleted.contains(&file_id), "{file_id} should be deleted");
        assert!(!app.storage.contains(file_id));
    }
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_deleting_absent_sketch_is_404() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (status, body) = app.delete(&format!("/v1/sketches/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_repair_orphans_sweeps_children_without_a_parent() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    // A live sketch whose children must survive the sweep
    let (_, sketch) = app.post("/v1/sketches", json!({"title": "Keeper"})).await;
    let sketch_id = id_of(&sketch);
    let (status, _) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/characters"),
            json!({"name": "Narrator"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Orphans, as an interrupted sketch cascade would leave them
    let ghost_sketch = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO characters (id, sketch_id, name) VALUES ($1, $2, 'Ghost')",
    )
    .bind(Uuid::new_v4())
    .bind(ghost_sketch)
    .execute(&app.pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO scripts (id, sketch_id, file_id, file_name, version) \
         VALUES ($1, $2, $3, 'ghost.pdf', 1)",
    )
    .bind(Uuid::new_v4())
    .bind(ghost_sketch)
    .bind(Uuid::new_v4())
    .execute(&app.pool)
    .await
    .unwrap();

    // And orphans from an interrupted prop cascade: media and a link under
    // the live sketch, both pointing at a prop that no longer exists
    let ghost_prop = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO prop_media (id, prop_id, file_id, file_name, file_type) \
         VALUES ($1, $2, $3, 'ghost.jpg', 'image/jpeg')",
    )
    .bind(Uuid::new_v4())
    .bind(ghost_prop)
    .bind(Uuid::new_v4())
    .execute(&app.pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO sketch_props (id, sketch_id, prop_id) VALUES ($1, $2, $3)")
        .bind(Uuid::new_v4())
        .bind(sketch_id)
        .bind(ghost_prop)
        .execute(&app.pool)
        .await
        .unwrap();

    let (status, body) = app
        .post("/v1/maintenance/repair-orphans", json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], 4);

    // The live sketch's children are untouched
    let count = app.count("characters", Some(("sketch_id", sketch_id))).await.unwrap();
    assert_eq!(count, 1);

    // Both prop-parented orphans are gone
    let count = app.count("prop_media", Some(("prop_id", ghost_prop))).await.unwrap();
    assert_eq!(count, 0);
    let count = app.count("sketch_props", Some(("prop_id", ghost_prop))).await.unwrap();
    assert_eq!(count, 0);

    // A second sweep finds nothing
    let (_, body) = app
        .post("/v1/maintenance/repair-orphans", json!({}))
        .await;
    assert_eq!(body["removed"], 0);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_scripts_version_monotonically() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, sketch) = app.post("/v1/sketches", json!({"title": "Two Drafts"})).await;
    let sketch_id = id_of(&sketch);

    let first = app.upload_file().await;
    let (_, v1) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/scripts"),
            json!({"file_id": first, "file_name": "draft-1.pdf"}),
        )
        .await;
    assert_eq!(v1["version"], 1);

    let second = app.upload_file().await;
    let (_, v2) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/scripts"),
            json!({"file_id": second, "file_name": "draft-2.pdf"}),
        )
        .await;
    assert_eq!(v2["version"], 2);

    // Latest resolves to the newest version with a retrieval URL
    let (status, latest) = app
        .get(&format!("/v1/sketches/{sketch_id}/scripts/latest"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest["version"], 2);
    assert_eq!(latest["file_name"], "draft-2.pdf");
    assert!(latest["file_url"].as_str().unwrap().contains(&second.to_string()));
}
