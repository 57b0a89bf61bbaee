//! Fixed, in-process breed catalog.

pub mod in_memory_breed_fetcher;

pub use in_memory_breed_fetcher::InMemoryBreedFetcher;
