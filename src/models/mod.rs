use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Opaque identifier for a track, owned by the external catalog.
///
/// The handler never inspects the contents; ids only flow between the
/// catalog, the reference dataset, and the recommender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request body for `POST /predict`
#[derive(Debug, Clone, Deserialize)]
pub struct TrackQuery {
    pub title: String,
    pub artist: String,
}

impl TrackQuery {
    /// Rejects empty fields. Values are checked verbatim, without trimming,
    /// so whitespace-only input passes.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.is_empty() {
            return Err(AppError::InvalidInput(
                "title must be a non-empty string".to_string(),
            ));
        }
        if self.artist.is_empty() {
            return Err(AppError::InvalidInput(
                "artist must be a non-empty string".to_string(),
            ));
        }
        Ok(())
    }

    /// Error message returned when no resolved id is in the reference dataset
    pub fn not_found_message(&self) -> String {
        format!("{} by {} not found.", self.title, self.artist)
    }
}

/// Response body for `POST /predict`
///
/// The not-found branch is returned with HTTP 200 and an `error` key in the
/// body rather than a 404; existing callers inspect the body, so the status
/// is part of the public contract.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Found {
        recommendations: Vec<serde_json::Value>,
    },
    NotFound {
        error: String,
    },
}

// ============================================================================
// Catalog API Types
// ============================================================================

/// Raw track-search response from the catalog API
#[derive(Debug, Deserialize)]
pub struct TrackSearchResponse {
    pub results: TrackSearchResults,
}

#[derive(Debug, Deserialize)]
pub struct TrackSearchResults {
    pub trackmatches: TrackMatches,
}

#[derive(Debug, Deserialize)]
pub struct TrackMatches {
    #[serde(default)]
    pub track: Vec<TrackMatch>,
}

/// A single catalog search match. Some entries carry no id; those are
/// unusable for recommendation lookups and get filtered out.
#[derive(Debug, Deserialize)]
pub struct TrackMatch {
    #[serde(default)]
    pub mbid: String,
    pub name: String,
    pub artist: String,
}

/// Raw recommendation response from the model server
#[derive(Debug, Deserialize)]
pub struct RecommendResponse {
    pub track_ids: Vec<TrackId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_accepts_non_empty_fields() {
        let query = TrackQuery {
            title: "Waka Waka".to_string(),
            artist: "Shakira".to_string(),
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let query = TrackQuery {
            title: "".to_string(),
            artist: "Shakira".to_string(),
        };
        assert!(matches!(
            query.validate(),
            Err(AppError::InvalidInput(msg)) if msg.contains("title")
        ));
    }

    #[test]
    fn test_validate_rejects_empty_artist() {
        let query = TrackQuery {
            title: "Waka Waka".to_string(),
            artist: "".to_string(),
        };
        assert!(matches!(
            query.validate(),
            Err(AppError::InvalidInput(msg)) if msg.contains("artist")
        ));
    }

    #[test]
    fn test_validate_does_not_trim() {
        // Emptiness is checked verbatim; whitespace counts as content
        let query = TrackQuery {
            title: " ".to_string(),
            artist: "\t".to_string(),
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_not_found_message_format() {
        let query = TrackQuery {
            title: "Unknown Song".to_string(),
            artist: "Nobody".to_string(),
        };
        assert_eq!(
            query.not_found_message(),
            "Unknown Song by Nobody not found."
        );
    }

    #[test]
    fn test_predict_response_found_serialization() {
        let response = PredictResponse::Found {
            recommendations: vec![json!({"artist": "A1", "title": "T1"})],
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"recommendations": [{"artist": "A1", "title": "T1"}]})
        );
    }

    #[test]
    fn test_predict_response_not_found_serialization() {
        let response = PredictResponse::NotFound {
            error: "Unknown Song by Nobody not found.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"error": "Unknown Song by Nobody not found."})
        );
    }

    #[test]
    fn test_track_search_response_deserialization() {
        let json = r#"{
            "results": {
                "trackmatches": {
                    "track": [
                        {"mbid": "id1", "name": "Waka Waka", "artist": "Shakira"},
                        {"name": "Waka Waka (K-Mix)", "artist": "Shakira"}
                    ]
                }
            }
        }"#;

        let response: TrackSearchResponse = serde_json::from_str(json).unwrap();
        let matches = response.results.trackmatches.track;
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].mbid, "id1");
        assert_eq!(matches[0].name, "Waka Waka");
        assert_eq!(matches[0].artist, "Shakira");
        assert_eq!(matches[1].mbid, "");
    }
}
