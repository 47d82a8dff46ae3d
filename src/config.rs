use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Track catalog API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Track catalog API key
    pub catalog_api_key: String,

    /// Recommendation model server base URL
    #[serde(default = "default_recommender_url")]
    pub recommender_url: String,

    /// Path to the newline-delimited reference dataset of track ids
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_api_url() -> String {
    "https://ws.audioscrobbler.com".to_string()
}

fn default_recommender_url() -> String {
    "http://localhost:8500".to_string()
}

fn default_dataset_path() -> String {
    "data/track_ids.txt".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
