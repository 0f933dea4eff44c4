//! Prop inventory workflow tests
//!
//! Status lifecycle, null-vs-absent patch semantics, media attachments,
//! and the prop cascade delete.
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
async fn test_prop_status_lifecycle() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (status, prop) = app.post("/v1/props", json!({"name": "Rubber chicken"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(prop["status"], "idea");
    let prop_id = id_of(&prop);

    let (status, prop) = app
        .patch(&format!("/v1/props/{prop_id}"), json!({"status": "planned"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prop["status"], "planned");

    let (_, prop) = app
        .patch(&format!("/v1/props/{prop_id}"), json!({"status": "ready"}))
        .await;
    assert_eq!(prop["status"], "ready");

    // Unknown status values never reach the database
    let (status, _) = app
        .patch(&format!("/v1/props/{prop_id}"), json!({"status": "lost"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_prop_patch_null_clears_absent_keeps() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, member) = app.post("/v1/team-members", json!({"name": "Alice"})).await;
    let member_id = id_of(&member);

    let (_, prop) = app
        .post(
            "/v1/props",
            json!({
                "name": "Sword",
                "responsible_person_id": member_id,
                "notes": "Needs repainting"
            }),
        )
        .await;
    let prop_id = id_of(&prop);
    assert_eq!(prop["responsible_person_id"], member_id.to_string());

    // Patching an unrelated field keeps both
    let (_, prop) = app
        .patch(&format!("/v1/props/{prop_id}"), json!({"name": "Longsword"}))
        .await;
    assert_eq!(prop["responsible_person_id"], member_id.to_string());
    assert_eq!(prop["notes"], "Needs repainting");

    // Explicit null clears
    let (_, prop) = app
        .patch(
            &format!("/v1/props/{prop_id}"),
            json!({"responsible_person_id": null, "notes": null}),
        )
        .await;
    assert!(prop["responsible_person_id"].is_null());
    assert!(prop["notes"].is_null());
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_prop_media_resolves_file_urls() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, prop) = app.post("/v1/props", json!({"name": "Crown"})).await;
    let prop_id = id_of(&prop);

    let file_id = app.upload_file().await;
    let (status, media) = app
        .post(
            &format!("/v1/props/{prop_id}/media"),
            json!({
                "file_id": file_id,
                "file_name": "crown.jpg",
                "file_type": "image/jpeg"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(media["file_url"].as_str().unwrap().contains(&file_id.to_string()));

    let (_, listing) = app.get(&format!("/v1/props/{prop_id}/media")).await;
    let items = listing.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["file_name"], "crown.jpg");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_prop_cascade_delete_spares_the_sketch() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, sketch) = app.post("/v1/sketches", json!({"title": "Banquet"})).await;
    let sketch_id = id_of(&sketch);

    let (_, prop) = app.post("/v1/props", json!({"name": "Goblet"})).await;
    let prop_id = id_of(&prop);

    let file_id = app.upload_file().await;
    app.post(
        &format!("/v1/props/{prop_id}/media"),
        json!({
            "file_id": file_id,
            "file_name": "goblet.jpg",
            "file_type": "image/jpeg"
        }),
    )
    .await;

    let (status, _) = app
        .put(&format!("/v1/sketches/{sketch_id}/props/{prop_id}"))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.delete(&format!("/v1/props/{prop_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Media rows, blob, and the link are gone; the sketch is untouched
    assert_eq!(app.count("prop_media", Some(("prop_id", prop_id))).await.unwrap(), 0);
    assert_eq!(app.count("sketch_props", Some(("prop_id", prop_id))).await.unwrap(), 0);
    assert!(app.storage.deleted_ids().contains(&file_id));

    let (status, _) = app.get(&format!("/v1/sketches/{sketch_id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_attach_is_idempotent() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, sketch) = app.post("/v1/sketches", json!({"title": "Duel"})).await;
    let sketch_id = id_of(&sketch);
    let (_, prop) = app.post("/v1/props", json!({"name": "Rapier"})).await;
    let prop_id = id_of(&prop);

    let (first, link) = app
        .put(&format!("/v1/sketches/{sketch_id}/props/{prop_id}"))
        .await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, same_link) = app
        .put(&format!("/v1/sketches/{sketch_id}/props/{prop_id}"))
        .await;
    assert_eq!(second, StatusCode::OK);
    assert_eq!(id_of(&link), id_of(&same_link));

    assert_eq!(
        app.count("sketch_props", Some(("sketch_id", sketch_id))).await.unwrap(),
        1
    );

    // Detach, then detaching again is 404
    let (status, _) = app
        .delete(&format!("/v1/sketches/{sketch_id}/props/{prop_id}"))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app
        .delete(&format!("/v1/sketches/{sketch_id}/props/{prop_id}"))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_character_assignment_survives_member_delete() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, sketch) = app.post("/v1/sketches", json!({"title": "Interview"})).await;
    let sketch_id = id_of(&sketch);
    let (_, member) = app.post("/v1/team-members", json!({"name": "Alice"})).await;
    let member_id = id_of(&member);

    let (_, character) = app
        .post(
            &format!("/v1/sketches/{sketch_id}/characters"),
            json!({"name": "Interviewer"}),
        )
        .await;
    let character_id = id_of(&character);

    let (_, character) = app
        .patch(
            &format!("/v1/characters/{character_id}"),
            json!({"assigned_to": member_id}),
        )
        .await;
    assert_eq!(character["assigned_to"], member_id.to_string());

    // Deleting the member leaves the assignment dangling, not the character
    let (status, _) = app.delete(&format!("/v1/team-members/{member_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, listing) = app
        .get(&format!("/v1/sketches/{sketch_id}/characters"))
        .await;
    let characters = listing.as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["assigned_to"], member_id.to_string());

    let missing: Uuid = member_id;
    let (status, _) = app.get(&format!("/v1/team-members/{missing}")).await;
    // Route only supports PATCH/DELETE on a single member; listing is the read path
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
