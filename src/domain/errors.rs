//! Domain errors for the breed catalog.

use thiserror::Error;

/// Errors surfaced through the [`BreedFetcher`](crate::domain::ports::BreedFetcher) port.
///
/// Every failure to obtain sub-breed data collapses into `BreedNotFound`:
/// unknown breeds, blank input, and operational failures of the remote
/// catalog are indistinguishable to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreedError {
    /// No sub-breed data could be obtained for the given input
    #[error("Breed not found: {0}")]
    BreedNotFound(String),
}

impl BreedError {
    /// Build a `BreedNotFound` for the given input.
    pub fn not_found(breed: impl Into<String>) -> Self {
        Self::BreedNotFound(breed.into())
    }

    /// The breed input the failure refers to.
    pub fn breed(&self) -> &str {
        match self {
            Self::BreedNotFound(breed) => breed,
        }
    }
}

/// Result type for `BreedFetcher` operations.
pub type BreedResult<T> = Result<T, BreedError>;
