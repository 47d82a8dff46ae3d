/// Track catalog abstraction
///
/// This module provides a pluggable seam for the external music catalog used
/// to resolve (title, artist) pairs to track ids and to fetch display info
/// for recommended tracks.
use crate::{error::AppResult, models::TrackId};

pub mod audioscrobbler;

/// Trait for external track catalogs
///
/// Catalogs must implement both id resolution (by title and artist) and info
/// lookup (by track id). Using the same catalog for both keeps the ids
/// consistent: an id resolved by one catalog is not meaningful to another.
#[async_trait::async_trait]
pub trait TrackCatalog: Send + Sync {
    /// Resolve a (title, artist) pair to candidate track ids
    ///
    /// Returns the catalog's matches in its own ranking order; callers pick
    /// the first candidate that passes the reference-dataset membership test.
    async fn track_ids(&self, title: &str, artist: &str) -> AppResult<Vec<TrackId>>;

    /// Fetch display info for a track id
    ///
    /// The payload shape is owned entirely by the catalog; callers forward it
    /// to API clients untouched.
    async fn track_info(&self, track_id: &TrackId) -> AppResult<serde_json::Value>;

    /// Catalog name for logging and debugging
    fn name(&self) -> &'static str;
}
