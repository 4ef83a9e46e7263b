//! Dream CRUD over the REST surface

use axum::http::StatusCode;
use serde_json::json;

use somnium_e2e_tests::fixtures::{full_dream, minimal_dream};
use somnium_e2e_tests::harness::{error_fields, TestApi};

#[tokio::test]
async fn create_then_get_roundtrip() {
    let api = TestApi::new();

    let (status, created) = api.post("/api/dreams", full_dream()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("id assigned");
    assert!(created["createdAt"].is_string());
    assert_eq!(created["title"], "Night swim");
    assert_eq!(created["elements"], json!(["ocean", "moonlight", "door"]));

    let (status, fetched) = api.get(&format!("/api/dreams/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_dream_is_404() {
    let api = TestApi::new();
    let (status, body) = api.get("/api/dreams/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Dream not found");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let api = TestApi::new();
    let (status, _) = api.get("/api/dreams/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_missing_fields_reports_each_field() {
    let api = TestApi::new();

    let (status, body) = api.post("/api/dreams", json!({ "mood": "happy" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error");

    let fields = error_fields(&body);
    assert!(fields.contains(&"title".to_string()));
    assert!(fields.contains(&"description".to_string()));
    assert!(fields.contains(&"date".to_string()));
}

#[tokio::test]
async fn create_rejects_unknown_fields() {
    let api = TestApi::new();
    let mut body = full_dream();
    body["ownerId"] = json!(42);

    let (status, _) = api.post("/api/dreams", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_merges_partial_fields() {
    let api = TestApi::new();
    let id = api.create(full_dream()).await;

    let (status, updated) = api
        .put(
            &format!("/api/dreams/{}", id),
            json!({ "interpretation": "Themes of transition" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["interpretation"], "Themes of transition");
    // Untouched fields survive
    assert_eq!(updated["title"], "Night swim");
    assert_eq!(updated["mood"], "peaceful");
}

#[tokio::test]
async fn update_missing_dream_is_404() {
    let api = TestApi::new();
    let (status, _) = api
        .put("/api/dreams/777", json!({ "title": "renamed" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_delete_again() {
    let api = TestApi::new();
    let id = api.create(full_dream()).await;

    let (status, _) = api.delete(&format!("/api/dreams/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The record is really gone
    let (status, _) = api.get(&format!("/api/dreams/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is a 404, not an error
    let (status, _) = api.delete(&format!("/api/dreams/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_dreams_newest_first() {
    let api = TestApi::new();
    api.create(minimal_dream("middle", "2026-02-02T00:00:00Z"))
        .await;
    api.create(minimal_dream("newest", "2026-02-03T00:00:00Z"))
        .await;
    api.create(minimal_dream("oldest", "2026-02-01T00:00:00Z"))
        .await;

    let (status, body) = api.get("/api/dreams").await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body
        .as_array()
        .expect("list response is an array")
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn health_reports_record_count() {
    let api = TestApi::new();
    api.create(full_dream()).await;

    let (status, body) = api.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["totalDreams"], 1);
}
