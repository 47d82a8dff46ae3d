use crate::{
    error::AppResult,
    models::TrackId,
    services::{dataset::TrackDataset, providers::TrackCatalog, recommender::Recommender},
};

/// Result of the predict pipeline for one (title, artist) pair
#[derive(Debug)]
pub enum PredictOutcome {
    /// Recommendations in the order the recommender produced them
    Found(Vec<serde_json::Value>),
    /// No resolved candidate id is in the reference dataset
    NotFound,
}

/// Runs the predict pipeline: resolve candidate ids, pick the first one in
/// the reference dataset, fetch recommendations for it, then fetch display
/// info for each recommended track.
///
/// The scan over candidates is strictly in resolution order; the dataset
/// member that appears earliest wins, regardless of value. Collaborator
/// failures propagate unhandled, there is no retry or fallback.
pub async fn recommendations_for(
    catalog: &dyn TrackCatalog,
    dataset: &TrackDataset,
    recommender: &dyn Recommender,
    title: &str,
    artist: &str,
) -> AppResult<PredictOutcome> {
    let candidates = catalog.track_ids(title, artist).await?;

    let seed: Option<&TrackId> = candidates.iter().find(|id| dataset.contains(id));
    let Some(seed) = seed else {
        tracing::info!(
            title = %title,
            artist = %artist,
            candidates = candidates.len(),
            catalog = catalog.name(),
            "No candidate id found in reference dataset"
        );
        return Ok(PredictOutcome::NotFound);
    };

    let recommended = recommender.recommended_tracks(seed).await?;

    let mut recommendations = Vec::with_capacity(recommended.len());
    for track_id in &recommended {
        recommendations.push(catalog.track_info(track_id).await?);
    }

    tracing::info!(
        title = %title,
        artist = %artist,
        seed = %seed,
        recommendations = recommendations.len(),
        recommender = recommender.name(),
        "Predict pipeline completed"
    );

    Ok(PredictOutcome::Found(recommendations))
}
