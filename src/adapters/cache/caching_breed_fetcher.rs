//! Memoizing wrapper for any `BreedFetcher`.
//!
//! Successful non-empty listings are cached for the lifetime of the wrapper,
//! keyed by the lowercased breed name. Failures and empty listings are never
//! cached, so a later lookup for the same breed reaches the delegate again.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

use crate::domain::errors::BreedResult;
use crate::domain::models::SubBreeds;
use crate::domain::ports::BreedFetcher;

/// Cache entries and the delegate call counter, guarded together.
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, SubBreeds>,
    calls_made: u64,
}

/// Caching breed fetcher decorator.
///
/// Wraps a delegate `BreedFetcher` and answers repeated lookups for a breed
/// from memory once the delegate has returned a non-empty listing for it.
/// Entries are never evicted or replaced.
pub struct CachingBreedFetcher<F: BreedFetcher> {
    inner: F,
    state: Mutex<CacheState>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Number of lookups forwarded to the delegate so far.
    ///
    /// Cache hits are not counted. Every miss is, including lookups the
    /// delegate rejects.
    pub fn calls_made(&self) -> u64 {
        self.lock().calls_made
    }

    /// Number of breeds currently cached.
    pub fn cached_breeds(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether a listing for `breed` (any casing) is cached.
    pub fn is_cached(&self, breed: &str) -> bool {
        self.lock().entries.contains_key(&breed.to_lowercase())
    }

    /// The wrapped delegate.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    // The state is consistent between statements, so a poisoned lock is
    // still safe to use.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    #[instrument(skip(self), fields(key = tracing::field::Empty))]
    async fn sub_breeds(&self, breed: &str) -> BreedResult<SubBreeds> {
        let key = breed.to_lowercase();
        tracing::Span::current().record("key", key.as_str());

        {
            let mut state = self.lock();
            if let Some(cached) = state.entries.get(&key) {
                debug!("cache hit");
                return Ok(cached.clone());
            }
            state.calls_made += 1;
        }

        debug!("cache miss, querying delegate");
        let result = self.inner.sub_breeds(&key).await?;

        if result.is_empty() {
            debug!("delegate returned no sub-breeds, not caching");
        } else {
            // Concurrent misses may race here; the first stored listing wins.
            self.lock()
                .entries
                .entry(key)
                .or_insert_with(|| result.clone());
        }

        Ok(result)
    }
}
