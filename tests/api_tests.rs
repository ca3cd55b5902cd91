use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use moodlens_api::api::{create_router, AppState};
use moodlens_api::data::Dataset;
use moodlens_api::models::{Interaction, Mood};

fn interaction(
    post_id: i64,
    title: Option<&str>,
    username: &str,
    category_id: i64,
    mood: Mood,
) -> Interaction {
    Interaction {
        post_id,
        post_title: title.map(String::from),
        username: username.to_string(),
        category_id,
        mood,
        average_rating_scaled: 0.5,
    }
}

fn sample_rows() -> Vec<Interaction> {
    vec![
        interaction(42, None, "alice", 7, Mood::Happy),
        interaction(43, Some("sunset at the beach"), "alice", 7, Mood::Happy),
        interaction(44, Some("midnight drive"), "bob", 7, Mood::Happy),
        interaction(45, Some("rainy afternoon"), "alice", 3, Mood::Calm),
    ]
}

/// Stages the rows as a CSV file and returns a server with the snapshot loaded
async fn server_with_dataset(rows: Vec<Interaction>) -> (TestServer, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewed_posts_refined.csv");
    Dataset::from_interactions(rows).save(&path).unwrap();

    let state = AppState::new(path.to_string_lossy().to_string());
    state.reload().await.unwrap();

    let server = TestServer::new(create_router(state)).unwrap();
    (server, dir)
}

#[tokio::test]
async fn test_health_check() {
    let (server, _dir) = server_with_dataset(sample_rows()).await;
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_recommendations_exact_match() {
    let (server, _dir) = server_with_dataset(sample_rows()).await;

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "alice",
            "category_id": 7,
            "mood": "happy"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["post_id"], 42);
    assert_eq!(recommendations[1]["post_title"], "sunset at the beach");
}

#[tokio::test]
async fn test_missing_title_replaced_with_sentinel() {
    let (server, _dir) =
        server_with_dataset(vec![interaction(42, None, "alice", 7, Mood::Happy)]).await;

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "alice",
            "category_id": 7,
            "mood": "happy"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendations"][0]["post_id"], 42);
    assert_eq!(body["recommendations"][0]["post_title"], "No Title Available");
}

#[tokio::test]
async fn test_string_category_id_coerces() {
    let (server, _dir) = server_with_dataset(sample_rows()).await;

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "bob",
            "category_id": "7",
            "mood": "happy"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendations"][0]["post_id"], 44);
}

#[tokio::test]
async fn test_malformed_category_id_returns_empty_message() {
    let (server, _dir) = server_with_dataset(sample_rows()).await;

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "alice",
            "category_id": "not-a-number",
            "mood": "happy"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "No recommendations found.");
    assert!(body.get("recommendations").is_none());
}

#[tokio::test]
async fn test_no_matching_rows_returns_empty_message() {
    let (server, _dir) = server_with_dataset(sample_rows()).await;

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "mallory",
            "category_id": 7,
            "mood": "happy"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "No recommendations found.");
}

#[tokio::test]
async fn test_unknown_mood_returns_empty_message() {
    let (server, _dir) = server_with_dataset(sample_rows()).await;

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "alice",
            "category_id": 7,
            "mood": "melancholic"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "No recommendations found.");
}

#[tokio::test]
async fn test_missing_dataset_degrades_to_empty_message() {
    // State pointed at a path that does not exist; startup load failed
    let state = AppState::new("no/such/table.csv");
    let server = TestServer::new(create_router(state)).unwrap();

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "alice",
            "category_id": 7,
            "mood": "happy"
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "No recommendations found.");
}

#[tokio::test]
async fn test_reload_missing_file_reports_unavailable() {
    let state = AppState::new("no/such/table.csv");
    let server = TestServer::new(create_router(state)).unwrap();

    let response = server.post("/admin/reload").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_reload_swaps_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.csv");
    Dataset::from_interactions(vec![interaction(1, Some("old post"), "alice", 7, Mood::Happy)])
        .save(&path)
        .unwrap();

    let state = AppState::new(path.to_string_lossy().to_string());
    state.reload().await.unwrap();
    let server = TestServer::new(create_router(state)).unwrap();

    // Stage a new table at the same path and reload through the API
    Dataset::from_interactions(vec![interaction(2, Some("new post"), "alice", 7, Mood::Happy)])
        .save(&path)
        .unwrap();

    let response = server.post("/admin/reload").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "reloaded");
    assert_eq!(body["rows"], 1);

    let response = server
        .post("/recommendations")
        .json(&json!({
            "username": "alice",
            "category_id": 7,
            "mood": "happy"
        }))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["recommendations"][0]["post_id"], 2);
}
