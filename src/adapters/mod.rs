//! Adapters implementing the `BreedFetcher` port without network access.

pub mod cache;
pub mod memory;
