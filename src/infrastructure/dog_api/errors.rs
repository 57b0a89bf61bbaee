//! dog.ceo client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the dog.ceo API
///
/// These never cross the `BreedFetcher` port: the fetcher logs them and
/// reports `BreedNotFound` instead.
#[derive(Error, Debug)]
pub enum DogApiError {
    /// Base URL could not be parsed or cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Network error, timeout, or unreadable body
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(StatusCode),

    /// Response body was not valid JSON
    #[error("JSON deserialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Body parsed but its `status` field was not `success`
    #[error("API reported status {status:?}: {message}")]
    Unsuccessful {
        /// Value of the `status` field
        status: String,
        /// Error text from the `message` field
        message: String,
    },

    /// Body parsed but `message` was not an array of strings
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl DogApiError {
    /// Whether the remote catalog answered but does not know the breed.
    ///
    /// Anything else is an operational failure (network, server, payload).
    pub fn is_unknown_breed(&self) -> bool {
        match self {
            Self::HttpStatus(status) => *status == StatusCode::NOT_FOUND,
            Self::Unsuccessful { .. } => true,
            _ => false,
        }
    }
}
