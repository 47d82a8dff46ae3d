use std::sync::Arc;

use crate::services::{dataset::TrackDataset, providers::TrackCatalog, recommender::Recommender};

/// Shared application state
///
/// Constructed once at process start and injected into every handler; the
/// collaborators are read-only, so requests share them without coordination.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn TrackCatalog>,
    pub dataset: Arc<TrackDataset>,
    pub recommender: Arc<dyn Recommender>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn TrackCatalog>,
        dataset: Arc<TrackDataset>,
        recommender: Arc<dyn Recommender>,
    ) -> Self {
        Self {
            catalog,
            dataset,
            recommender,
        }
    }
}
