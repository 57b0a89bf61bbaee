//! Port trait definitions (Hexagonal Architecture)
//!
//! - BreedFetcher: sub-breed lookups, implemented by the dog.ceo client,
//!   the in-memory catalog, and the caching decorator

pub mod breed_fetcher;

pub use breed_fetcher::BreedFetcher;
