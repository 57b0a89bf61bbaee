//! In-memory breed catalog.
//!
//! Serves sub-breed listings from a fixed map. Used for offline runs and as
//! a delegate in tests, where it records every lookup it receives.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::errors::{BreedError, BreedResult};
use crate::domain::models::SubBreeds;
use crate::domain::ports::BreedFetcher;

/// A `BreedFetcher` backed by a fixed map of breeds.
#[derive(Debug, Default)]
pub struct InMemoryBreedFetcher {
    breeds: HashMap<String, SubBreeds>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryBreedFetcher {
    /// An empty catalog; every lookup fails until breeds are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a breed and its sub-breeds. The name is lowercased.
    #[must_use]
    pub fn with_breed<I, S>(mut self, breed: &str, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds
            .insert(breed.trim().to_lowercase(), sub_breeds.into_iter().collect());
        self
    }

    /// Number of lookups received, including failed ones.
    pub fn calls(&self) -> usize {
        self.requested_log().len()
    }

    /// Every breed argument received, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested_log().clone()
    }

    fn requested_log(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.requested.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, I, S> FromIterator<(K, I)> for InMemoryBreedFetcher
where
    K: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |catalog, (breed, subs)| {
                catalog.with_breed(breed.as_ref(), subs)
            })
    }
}

#[async_trait]
impl BreedFetcher for InMemoryBreedFetcher {
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds> {
        self.requested_log().push(breed.to_string());

        let key = breed.trim().to_lowercase();
        if key.is_empty() {
            return Err(BreedError::not_found(breed));
        }

        self.breeds
            .get(&key)
            .cloned()
            .ok_or_else(|| BreedError::not_found(breed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_ignores_case_and_whitespace() {
        let catalog = InMemoryBreedFetcher::new().with_breed("Bulldog", ["boston", "english", "french"]);

        let subs = catalog.sub_breeds("  BULLDOG ").await.unwrap();
        assert_eq!(subs, ["boston", "english", "french"]);
    }

    #[tokio::test]
    async fn test_unknown_and_blank_are_not_found() {
        let catalog = InMemoryBreedFetcher::new();

        assert_eq!(
            catalog.sub_breeds("unknownbreed").await,
            Err(BreedError::not_found("unknownbreed"))
        );
        assert!(catalog.sub_breeds("").await.is_err());
        assert_eq!(catalog.calls(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let catalog: InMemoryBreedFetcher = [("hound", vec!["afghan", "basset"]), ("pug", vec![])]
            .into_iter()
            .collect();

        assert_eq!(catalog.breeds.len(), 2);
        assert!(catalog.breeds["pug"].is_empty());
    }
}
