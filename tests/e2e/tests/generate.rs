//! Interpretation + visualization seed generation

use axum::http::StatusCode;
use serde_json::json;

use somnium_core::VisualizationScene;
use somnium_e2e_tests::harness::{error_fields, TestApi};

const DISCLAIMER: &str = "\n\nRemember that dream interpretation is subjective, and personal context may provide deeper meaning.";

#[tokio::test]
async fn missing_description_is_400() {
    let api = TestApi::new();
    let (status, body) = api.post("/api/generate", json!({ "mood": "happy" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["description"]);
}

#[tokio::test]
async fn too_short_description_is_400() {
    let api = TestApi::new();
    let (status, body) = api
        .post("/api/generate", json!({ "description": "fly" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&body), vec!["description"]);
}

#[tokio::test]
async fn known_elements_and_mood_build_the_exact_interpretation() {
    let api = TestApi::new();

    // A description of nothing but stop words leaves the element list alone
    let (status, body) = api
        .post(
            "/api/generate",
            json!({
                "description": "of the and for",
                "elements": ["flying", "dark forest"],
                "mood": "happy",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["elements"], json!(["flying", "dark forest"]));
    assert_eq!(
        body["interpretation"],
        format!(
            "Your dream suggests themes of: Freedom and perspective, \
             The unknown or uncertainty, Growth and life path, \
             Contentment or wish fulfillment.{}",
            DISCLAIMER
        )
    );
    assert_eq!(
        body["visualizationSeed"],
        json!({ "elements": ["flying", "dark forest"], "mood": "happy" })
    );
}

#[tokio::test]
async fn description_keywords_become_elements() {
    let api = TestApi::new();
    let (status, body) = api
        .post(
            "/api/generate",
            json!({ "description": "climbing a huge mountain at night" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let elements = body["elements"].as_array().unwrap();
    assert!(elements.contains(&json!("climbing")));
    assert!(elements.contains(&json!("mountain")));
    assert!(elements.contains(&json!("night")));
    // Stop words and short tokens are dropped
    assert!(!elements.contains(&json!("a")));
    assert!(!elements.contains(&json!("at")));

    let interpretation = body["interpretation"].as_str().unwrap();
    assert!(interpretation.contains("Challenges and obstacles to overcome"));
    assert!(interpretation.contains("The unknown or uncertainty"));
}

#[tokio::test]
async fn mood_defaults_to_neutral() {
    let api = TestApi::new();
    let (_, body) = api
        .post("/api/generate", json!({ "description": "of the and for" }))
        .await;

    assert_eq!(body["visualizationSeed"]["mood"], "neutral");
    assert_eq!(
        body["interpretation"],
        format!(
            "Your dream suggests themes of: Personal exploration and self-discovery.{}",
            DISCLAIMER
        )
    );
}

#[tokio::test]
async fn visualization_seed_rebuilds_the_same_scene() {
    let api = TestApi::new();
    let (_, body) = api
        .post(
            "/api/generate",
            json!({
                "description": "swimming in a dark ocean",
                "mood": "scary",
            }),
        )
        .await;

    let elements: Vec<String> = body["visualizationSeed"]["elements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap().to_string())
        .collect();
    let mood = body["visualizationSeed"]["mood"].as_str().unwrap();

    // Two scenes built from the same seed draw identical frames
    let a = VisualizationScene::new(&elements, Some(mood), 800, 600);
    let b = VisualizationScene::new(&elements, Some(mood), 800, 600);
    assert_eq!(a.tick(2.0), b.tick(2.0));
    assert_eq!(a.shapes().len(), elements.len() + 5);
}
