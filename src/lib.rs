//! Breed Catalog - dog sub-breed lookups with memoization
//!
//! Fetches the sub-breeds of a dog breed from the dog.ceo catalog and offers a
//! caching decorator that answers repeated lookups from memory.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, the `BreedFetcher` port, and errors
//! - **Adapters** (`adapters`): Caching decorator and in-memory catalog
//! - **Infrastructure Layer** (`infrastructure`): dog.ceo HTTP client, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use breed_catalog::{BreedFetcher, CachingBreedFetcher, DogApiBreedFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = CachingBreedFetcher::new(DogApiBreedFetcher::new()?);
//!     let hounds = fetcher.sub_breeds("Hound").await?;
//!     let again = fetcher.sub_breeds("hound").await?;
//!     assert_eq!(hounds, again);
//!     assert_eq!(fetcher.calls_made(), 1);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::cache::CachingBreedFetcher;
pub use adapters::memory::InMemoryBreedFetcher;
pub use domain::errors::{BreedError, BreedResult};
pub use domain::models::{Config, SubBreeds};
pub use domain::ports::BreedFetcher;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::dog_api::{DogApiBreedFetcher, DogApiError};
