//! Substring search over the REST surface

use axum::http::StatusCode;
use serde_json::json;

use somnium_e2e_tests::fixtures::minimal_dream;
use somnium_e2e_tests::harness::TestApi;

#[tokio::test]
async fn search_matches_are_sorted_newest_first() {
    let api = TestApi::new();
    // Every fixture description contains "dream"
    api.create(minimal_dream("first", "2026-01-01T00:00:00Z"))
        .await;
    api.create(minimal_dream("third", "2026-01-03T00:00:00Z"))
        .await;
    api.create(minimal_dream("second", "2026-01-02T00:00:00Z"))
        .await;

    let (status, body) = api.get("/api/dreams/search/dream").await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body
        .as_array()
        .expect("search response is an array")
        .iter()
        .map(|d| d["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn search_is_case_insensitive_over_elements() {
    let api = TestApi::new();
    let mut dream = minimal_dream("woods", "2026-01-01T00:00:00Z");
    dream["elements"] = json!(["Dark Forest"]);
    api.create(dream).await;
    api.create(minimal_dream("city", "2026-01-02T00:00:00Z"))
        .await;

    let (status, body) = api.get("/api/dreams/search/FOREST").await;
    assert_eq!(status, StatusCode::OK);

    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "woods");
}

#[tokio::test]
async fn search_matches_location() {
    let api = TestApi::new();
    let mut dream = minimal_dream("away", "2026-01-01T00:00:00Z");
    dream["location"] = json!("an abandoned lighthouse");
    api.create(dream).await;

    let (_, body) = api.get("/api/dreams/search/lighthouse").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn search_with_no_matches_is_empty_not_an_error() {
    let api = TestApi::new();
    api.create(minimal_dream("only", "2026-01-01T00:00:00Z"))
        .await;

    let (status, body) = api.get("/api/dreams/search/zeppelin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
