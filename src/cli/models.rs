//! CLI view models.

use serde::Serialize;

use crate::domain::errors::BreedResult;
use crate::domain::models::SubBreeds;

/// Result of looking up one breed from the command line.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    /// Breed as typed by the user
    pub breed: String,
    /// Sub-breeds when the lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_breeds: Option<SubBreeds>,
    /// Failure message when it did not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupOutcome {
    /// Record the result of looking up `breed`.
    pub fn new(breed: &str, result: BreedResult<SubBreeds>) -> Self {
        match result {
            Ok(sub_breeds) => Self {
                breed: breed.to_string(),
                sub_breeds: Some(sub_breeds),
                error: None,
            },
            Err(err) => Self {
                breed: breed.to_string(),
                sub_breeds: None,
                error: Some(err.to_string()),
            },
        }
    }

    /// Whether the lookup returned a listing (possibly empty).
    pub fn is_found(&self) -> bool {
        self.sub_breeds.is_some()
    }
}

/// JSON document printed by `sub-breeds --json`.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// One entry per requested breed, in order
    pub results: Vec<LookupOutcome>,
    /// Requests sent to the catalog; absent when caching is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls_made: Option<u64>,
}
