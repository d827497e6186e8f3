//! Configuration types.

use serde::Deserialize;

/// Default TheCatApi endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Default page size for breed listings.
pub const DEFAULT_BREEDS_LIMIT: u32 = 25;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// TheCatApi client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// API base url, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional API key sent as `x-api-key`. The public endpoints answer
    /// without one, at reduced rate limits.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Page size for breed listings.
    #[serde(default = "default_breeds_limit")]
    pub breeds_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            breeds_limit: default_breeds_limit(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_breeds_limit() -> u32 {
    DEFAULT_BREEDS_LIMIT
}
