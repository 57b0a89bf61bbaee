//! dog.ceo catalog client
//!
//! Live `BreedFetcher` implementation over HTTP (reqwest).

pub mod client;
pub mod errors;
pub mod types;

pub use client::DogApiBreedFetcher;
pub use errors::DogApiError;
pub use types::ApiResponse;
