use std::collections::HashSet;
use std::path::Path;

use crate::models::TrackId;

/// Reference dataset of track ids the recommendation model was trained on.
///
/// Only ids present here can seed a recommendation lookup. Loaded once at
/// startup from a newline-delimited id file and shared read-only across
/// requests.
pub struct TrackDataset {
    ids: HashSet<TrackId>,
}

impl TrackDataset {
    /// Load the dataset from a newline-delimited id file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read dataset file {}: {}", path.display(), e)
        })?;
        Ok(Self::from_contents(&contents))
    }

    /// Build the dataset from file contents, skipping blank lines
    pub fn from_contents(contents: &str) -> Self {
        let ids = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(TrackId::from)
            .collect();
        Self { ids }
    }

    /// Build the dataset from track ids
    pub fn from_ids(ids: impl IntoIterator<Item = TrackId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Membership test used to pick a usable candidate id
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.ids.contains(track_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
