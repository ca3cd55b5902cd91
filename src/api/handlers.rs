use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{CategoryParam, Recommendation};
use crate::services::selector;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub username: Option<String>,
    pub category_id: Option<CategoryParam>,
    pub mood: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationsResponse {
    Found { recommendations: Vec<Recommendation> },
    Empty { message: String },
}

fn no_recommendations() -> RecommendationsResponse {
    RecommendationsResponse::Empty {
        message: "No recommendations found.".to_string(),
    }
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Generate recommendations for a username/category/mood triple.
///
/// Every legitimate "nothing to return" case degrades to the same empty
/// message: missing request fields, an unloadable dataset, a malformed
/// category id, or simply zero matching rows. Only unexpected internal
/// failures surface as errors.
pub async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
    let Some(snapshot) = state.snapshot().await else {
        tracing::warn!(
            path = state.dataset_path(),
            "No dataset snapshot available, returning empty result"
        );
        return Json(no_recommendations());
    };

    let (Some(username), Some(category), Some(mood)) =
        (&request.username, &request.category_id, &request.mood)
    else {
        tracing::debug!("Request missing username, category_id, or mood");
        return Json(no_recommendations());
    };

    let recommendations = selector::select(&snapshot, username, category, mood);

    tracing::info!(
        username = %username,
        mood = %mood,
        matches = recommendations.len(),
        "Recommendations generated"
    );

    if recommendations.is_empty() {
        return Json(no_recommendations());
    }

    Json(RecommendationsResponse::Found { recommendations })
}

/// Swap in a freshly loaded dataset snapshot.
///
/// An absent dataset file is reported, not raised; anything else is an
/// internal failure.
pub async fn reload_dataset(State(state): State<AppState>) -> AppResult<Json<Value>> {
    match state.reload().await {
        Ok(rows) => {
            tracing::info!(rows, "Dataset snapshot reloaded");
            Ok(Json(json!({ "status": "reloaded", "rows": rows })))
        }
        Err(AppError::DatasetNotFound(path)) => {
            tracing::warn!(path = %path, "Dataset file not found on reload");
            Ok(Json(json!({
                "status": "unavailable",
                "message": "Dataset file not found."
            })))
        }
        Err(e) => {
            tracing::error!(error = %e, "Dataset reload failed");
            Err(e)
        }
    }
}
