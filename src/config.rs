use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the refined interaction table
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Feed API base URL
    #[serde(default = "default_feed_api_url")]
    pub feed_api_url: String,

    /// Feed API access token
    #[serde(default)]
    pub feed_api_token: String,

    /// Page size used when paging through feed endpoints
    #[serde(default = "default_feed_page_size")]
    pub feed_page_size: u32,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_dataset_path() -> String {
    "data/processed/viewed_posts_refined.csv".to_string()
}

fn default_feed_api_url() -> String {
    "https://api.socialverseapp.com".to_string()
}

fn default_feed_page_size() -> u32 {
    1000
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
