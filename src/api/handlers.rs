use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Json,
};
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::{PredictResponse, TrackQuery};
use crate::services::predict::{self, PredictOutcome};

use super::AppState;

/// Static documentation page served at the root path
const API_DOCS: &str = r#"<!DOCTYPE html>
<html>
<head><title>Suggestify API</title></head>
<body>
<h1>Suggestify API</h1>
<p>Suggests songs using a machine learning model.</p>
<h2>POST /predict</h2>
<p>Request body: <code>{"title": "Waka Waka", "artist": "Shakira"}</code></p>
<p>Success response: <code>{"recommendations": [{"artist": ..., "title": ..., ...}, ...]}</code></p>
<p>When the track cannot be resolved against the reference dataset, the
response is <code>{"error": "&lt;title&gt; by &lt;artist&gt; not found."}</code>.</p>
</body>
</html>
"#;

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Serves API documentation at the root path
pub async fn api_docs() -> Html<&'static str> {
    Html(API_DOCS)
}

/// Suggest a list of recommendations for the requested track
///
/// Rejects empty title or artist before any external call. The not-found
/// branch keeps HTTP 200 with an `error` body; callers check the body.
pub async fn predict(
    State(state): State<AppState>,
    Json(query): Json<TrackQuery>,
) -> AppResult<Json<PredictResponse>> {
    query.validate()?;

    let outcome = predict::recommendations_for(
        state.catalog.as_ref(),
        &state.dataset,
        state.recommender.as_ref(),
        &query.title,
        &query.artist,
    )
    .await?;

    let response = match outcome {
        PredictOutcome::Found(recommendations) => PredictResponse::Found { recommendations },
        PredictOutcome::NotFound => PredictResponse::NotFound {
            error: query.not_found_message(),
        },
    };

    Ok(Json(response))
}
