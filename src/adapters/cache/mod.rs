//! In-memory caching layer for sub-breed lookups.
//!
//! Wraps the `BreedFetcher` port as a decorator so callers can swap the
//! cached and uncached fetchers freely.

pub mod caching_breed_fetcher;

pub use caching_breed_fetcher::CachingBreedFetcher;
