//! Ordered-list workflow tests
//!
//! Exercise append-on-create, full-list reorder, and the
//! positions-are-never-reclaimed rule against a real database.
//!
//! All tests here are ignored by default; run with a database:
//!   TEST_DATABASE_URL=postgres://... cargo test -- --ignored

mod common;

use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use crate::common::{id_of, TestApp};

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_members_append_in_creation_order() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    for name in ["Alice", "Bob", "Carol"] {
        let (status, body) = app.post("/v1/team-members", json!({"name": name})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], name);
    }

    let (status, body) = app.get("/v1/team-members").await;
    assert_eq!(status, StatusCode::OK);

    let members = body.as_array().unwrap();
    let names: Vec<&str> = members.iter().map(|m| m["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
    let positions: Vec<i64> = members.iter().map(|m| m["position"].as_i64().unwrap()).collect();
    assert_eq!(positions, [0, 1, 2]);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_reorder_rewrites_positions() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let mut ids = Vec::new();
    for name in ["Alice", "Bob", "Carol"] {
        let (_, body) = app.post("/v1/team-members", json!({"name": name})).await;
        ids.push(id_of(&body));
    }

    // Move Carol to the front
    let reordered = [ids[2], ids[0], ids[1]];
    let (status, _) = app
        .post("/v1/team-members/reorder", json!({"member_ids": reordered}))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get("/v1/team-members").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Carol", "Alice", "Bob"]);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_malformed_reorder_is_rejected_and_changes_nothing() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, alice) = app.post("/v1/team-members", json!({"name": "Alice"})).await;
    let (_, bob) = app.post("/v1/team-members", json!({"name": "Bob"})).await;
    let alice_id = id_of(&alice);
    let bob_id = id_of(&bob);

    // Too short
    let (status, body) = app
        .post("/v1/team-members/reorder", json!({"member_ids": [alice_id]}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    // Duplicate id
    let (status, _) = app
        .post(
            "/v1/team-members/reorder",
            json!({"member_ids": [alice_id, alice_id]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown id
    let (status, _) = app
        .post(
            "/v1/team-members/reorder",
            json!({"member_ids": [alice_id, uuid::Uuid::new_v4()]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The stored ordering is untouched
    let (_, body) = app.get("/v1/team-members").await;
    let ids: Vec<uuid::Uuid> = body.as_array().unwrap().iter().map(id_of).collect();
    assert_eq!(ids, [alice_id, bob_id]);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_positions_are_never_reclaimed() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, alice) = app.post("/v1/team-members", json!({"name": "Alice"})).await;
    let (_, bob) = app.post("/v1/team-members", json!({"name": "Bob"})).await;
    assert_eq!(alice["position"], 0);
    assert_eq!(bob["position"], 1);

    // Deleting Alice leaves a gap; Carol sorts after Bob, not into the gap
    let (status, _) = app.delete(&format!("/v1/team-members/{}", id_of(&alice))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, carol) = app.post("/v1/team-members", json!({"name": "Carol"})).await;
    assert_eq!(carol["position"], 2);

    let (_, body) = app.get("/v1/team-members").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Bob", "Carol"]);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_drained_list_does_not_restart_at_zero() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (_, alice) = app.post("/v1/team-members", json!({"name": "Alice"})).await;
    assert_eq!(alice["position"], 0);

    let (status, _) = app.delete(&format!("/v1/team-members/{}", id_of(&alice))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The list is empty, but position 0 was spent: Bob gets 1
    let (_, bob) = app.post("/v1/team-members", json!({"name": "Bob"})).await;
    assert_eq!(bob["position"], 1);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_duplicate_member_names_both_persist() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let (s1, first) = app.post("/v1/team-members", json!({"name": "Understudy"})).await;
    let (s2, second) = app.post("/v1/team-members", json!({"name": "Understudy"})).await;
    assert_eq!(s1, StatusCode::CREATED);
    assert_eq!(s2, StatusCode::CREATED);
    assert_ne!(id_of(&first), id_of(&second));

    let (_, body) = app.get("/v1/team-members").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a running Postgres - run locally with --ignored
async fn test_sketch_list_shares_the_ordering_behavior() {
    let app = TestApp::new().await.unwrap();
    app.cleanup().await.unwrap();

    let mut ids = Vec::new();
    for title in ["Cold Open", "Monologue", "Closer"] {
        let (status, body) = app.post("/v1/sketches", json!({"title": title})).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(id_of(&body));
    }

    let reordered = [ids[1], ids[2], ids[0]];
    let (status, _) = app
        .post("/v1/sketches/reorder", json!({"sketch_ids": reordered}))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get("/v1/sketches").await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Monologue", "Closer", "Cold Open"]);
}
