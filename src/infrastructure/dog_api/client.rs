//! HTTP client for the dog.ceo breed list endpoint.

use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Url};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::errors::DogApiError;
use super::types::ApiResponse;
use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::models::{CatalogConfig, SubBreeds};
use crate::domain::ports::BreedFetcher;

/// `BreedFetcher` backed by the dog.ceo HTTP API
///
/// Issues `GET {base_url}/breed/{breed}/list` and reads the sub-breed names
/// from the `message` array of the response. Every failure is reported
/// through the port as `BreedNotFound`; the underlying cause is logged.
#[derive(Debug, Clone)]
pub struct DogApiBreedFetcher {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    /// Base URL all breed paths are appended to
    base_url: Url,
}

impl DogApiBreedFetcher {
    /// Create a fetcher for the dog.ceo API with default settings
    pub fn new() -> Result<Self, DogApiError> {
        Self::with_config(&CatalogConfig::default())
    }

    /// Create a fetcher from catalog configuration
    ///
    /// # Errors
    /// Returns `InvalidBaseUrl` if the base URL cannot carry path segments and
    /// `ClientBuild` if the HTTP client cannot be constructed.
    pub fn with_config(config: &CatalogConfig) -> Result<Self, DogApiError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| DogApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(DogApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(4)
            .build()
            .map_err(DogApiError::ClientBuild)?;

        debug!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "dog.ceo client initialized"
        );

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Build the per-breed list endpoint; the breed is percent-encoded as a
    /// single path segment.
    fn list_url(&self, breed: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["breed", breed, "list"]);
        }
        url
    }

    /// Fetch the sub-breeds of an already-normalized breed, keeping the
    /// failure cause.
    pub async fn fetch(&self, breed: &str) -> Result<Vec<String>, DogApiError> {
        let url = self.list_url(breed);
        debug!(%url, "requesting breed list");

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DogApiError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        let payload: ApiResponse = serde_json::from_slice(&body)?;
        if let Some(code) = payload.code {
            debug!(code, "response body carries an error code");
        }

        payload.into_names()
    }
}

#[async_trait]
impl BreedFetcher for DogApiBreedFetcher {
    #[instrument(skip(self))]
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds> {
        let key = breed.trim().to_lowercase();
        if key.is_empty() {
            return Err(BreedError::not_found(breed));
        }

        match self.fetch(&key).await {
            Ok(names) => {
                debug!(count = names.len(), "breed list received");
                Ok(SubBreeds::from(names))
            }
            Err(err) if err.is_unknown_breed() => {
                debug!(error = %err, "breed not known to catalog");
                Err(BreedError::not_found(breed))
            }
            Err(err) => {
                warn!(error = %err, "breed list request failed");
                Err(BreedError::not_found(breed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> CatalogConfig {
        CatalogConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_url_construction() {
        let fetcher = DogApiBreedFetcher::with_config(&config("https://dog.ceo/api")).unwrap();
        assert_eq!(
            fetcher.list_url("hound").as_str(),
            "https://dog.ceo/api/breed/hound/list"
        );
    }

    #[test]
    fn test_list_url_tolerates_trailing_slash() {
        let fetcher = DogApiBreedFetcher::with_config(&config("http://localhost:1234/")).unwrap();
        assert_eq!(
            fetcher.list_url("pug").as_str(),
            "http://localhost:1234/breed/pug/list"
        );
    }

    #[test]
    fn test_list_url_encodes_breed_segment() {
        let fetcher = DogApiBreedFetcher::with_config(&config("https://dog.ceo/api")).unwrap();
        assert_eq!(
            fetcher.list_url("bull dog/x").as_str(),
            "https://dog.ceo/api/breed/bull%20dog%2Fx/list"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = DogApiBreedFetcher::with_config(&config("not a url")).unwrap_err();
        assert!(matches!(err, DogApiError::InvalidBaseUrl(_)));

        let err = DogApiBreedFetcher::with_config(&config("mailto:dogs@example.com")).unwrap_err();
        assert!(matches!(err, DogApiError::InvalidBaseUrl(_)));
    }
}
