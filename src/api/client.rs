//! HTTP client for TheCatApi.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::api::dto::{BreedDto, ImageDto};
use crate::config::ApiConfig;

/// Errors that can occur when talking to TheCatApi.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to construct the underlying HTTP client.
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),

    /// Transport-level failure (connect, timeout, invalid request).
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("TheCatApi returned status {status} for '{url}'")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Thin typed wrapper over TheCatApi's REST endpoints.
#[derive(Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CatApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    /// Returns [`ApiError::Build`] if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch one page of breeds.
    pub async fn breeds(&self, limit: u32, page: u32) -> Result<Vec<BreedDto>, ApiError> {
        let url = format!("{}/breeds?limit={limit}&page={page}", self.base_url);
        self.get_json(url).await
    }

    /// Fetch a single image with its attached breed data.
    pub async fn image(&self, id: &str) -> Result<ImageDto, ApiError> {
        let url = format!("{}/images/{id}", self.base_url);
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!(%url, "api request");

        let mut request = self.http.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await.map_err(|e| ApiError::Request {
            url: url.clone(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode { url, source: e })
    }
}
