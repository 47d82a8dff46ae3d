use reqwest::Client as HttpClient;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::{RecommendResponse, TrackId},
};

/// Trait for the external recommendation engine
///
/// Given a seed track id from the reference dataset, returns similar track
/// ids in ranked order. The ranking is the engine's; callers must not
/// re-sort it.
#[async_trait::async_trait]
pub trait Recommender: Send + Sync {
    /// Fetch recommended track ids for a seed track
    async fn recommended_tracks(&self, seed: &TrackId) -> AppResult<Vec<TrackId>>;

    /// Recommender name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Recommender backed by the model-serving HTTP endpoint
#[derive(Clone)]
pub struct ModelServerRecommender {
    http_client: HttpClient,
    base_url: String,
}

impl ModelServerRecommender {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }
}

#[async_trait::async_trait]
impl Recommender for ModelServerRecommender {
    async fn recommended_tracks(&self, seed: &TrackId) -> AppResult<Vec<TrackId>> {
        let url = format!("{}/recommend", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "track_id": seed }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Model server returned status {}: {}",
                status, body
            )));
        }

        let recommend_response: RecommendResponse = response.json().await?;

        tracing::info!(
            seed = %seed,
            recommendations = recommend_response.track_ids.len(),
            "Recommendation lookup completed"
        );

        Ok(recommend_response.track_ids)
    }

    fn name(&self) -> &'static str {
        "model-server"
    }
}
