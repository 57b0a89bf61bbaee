//! Sub-breed lookup port.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::errors::BreedResult;
use crate::domain::models::SubBreeds;

/// Source of sub-breed listings.
///
/// Implementations report every failure (unknown breed, blank input,
/// network error, unexpected payload) as
/// [`BreedError::BreedNotFound`](crate::domain::errors::BreedError::BreedNotFound).
#[async_trait]
pub trait BreedFetcher: Send + Sync {
    /// Fetch the sub-breeds of `breed`.
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds>;
}

#[async_trait]
impl<F: BreedFetcher + ?Sized> BreedFetcher for Arc<F> {
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds> {
        (**self).sub_breeds(breed).await
    }
}

#[async_trait]
impl<F: BreedFetcher + ?Sized> BreedFetcher for Box<F> {
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds> {
        (**self).sub_breeds(breed).await
    }
}
