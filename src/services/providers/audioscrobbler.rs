/// Audioscrobbler catalog provider
///
/// Resolves tracks and fetches display info through the Audioscrobbler-style
/// JSON API.
///
/// API Flow:
/// 1. Id resolution: /2.0/?method=track.search → ranked matches with mbids
/// 2. Track info: /2.0/?method=track.getInfo&mbid={id} → track object
///
/// Search matches without an mbid cannot drive downstream lookups and are
/// dropped during resolution.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{TrackId, TrackSearchResponse},
    services::providers::TrackCatalog,
};

const SEARCH_LIMIT: u32 = 10;

#[derive(Clone)]
pub struct AudioscrobblerCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl AudioscrobblerCatalog {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Extract usable track ids from a search response, preserving the
    /// catalog's ranking order
    fn collect_track_ids(response: TrackSearchResponse) -> Vec<TrackId> {
        response
            .results
            .trackmatches
            .track
            .into_iter()
            .filter(|m| !m.mbid.is_empty())
            .map(|m| TrackId::new(m.mbid))
            .collect()
    }
}

#[async_trait::async_trait]
impl TrackCatalog for AudioscrobblerCatalog {
    async fn track_ids(&self, title: &str, artist: &str) -> AppResult<Vec<TrackId>> {
        let url = format!("{}/2.0/", self.api_url);

        let limit = SEARCH_LIMIT.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("method", "track.search"),
                ("track", title),
                ("artist", artist),
                ("limit", limit.as_str()),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let search_response: TrackSearchResponse = response.json().await?;
        let track_ids = Self::collect_track_ids(search_response);

        tracing::info!(
            title = %title,
            artist = %artist,
            candidates = track_ids.len(),
            catalog = "audioscrobbler",
            "Track id resolution completed"
        );

        Ok(track_ids)
    }

    async fn track_info(&self, track_id: &TrackId) -> AppResult<serde_json::Value> {
        let url = format!("{}/2.0/", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("method", "track.getInfo"),
                ("mbid", track_id.as_str()),
                ("api_key", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let mut payload: serde_json::Value = response.json().await?;

        // The info object lives under a "track" key; forward it as-is
        match payload.get_mut("track") {
            Some(track) => Ok(track.take()),
            None => Err(AppError::ExternalApi(format!(
                "Catalog response for {} missing track info",
                track_id
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "audioscrobbler"
    }
}
