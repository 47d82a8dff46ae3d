use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use suggestify_api::api::{create_router, AppState};
use suggestify_api::config::Config;
use suggestify_api::services::dataset::TrackDataset;
use suggestify_api::services::providers::audioscrobbler::AudioscrobblerCatalog;
use suggestify_api::services::recommender::ModelServerRecommender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the reference dataset once; requests share it read-only
    let dataset = TrackDataset::load(&config.dataset_path)?;
    tracing::info!(
        path = %config.dataset_path,
        tracks = dataset.len(),
        "Loaded reference dataset"
    );

    let catalog = AudioscrobblerCatalog::new(
        config.catalog_api_key.clone(),
        config.catalog_api_url.clone(),
    );
    let recommender = ModelServerRecommender::new(config.recommender_url.clone());

    let state = AppState::new(
        Arc::new(catalog),
        Arc::new(dataset),
        Arc::new(recommender),
    );
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
