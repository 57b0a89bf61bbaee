//! Domain layer for the breed catalog
//!
//! Core models, the fetcher port, and the error type shared by every adapter.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{BreedError, BreedResult};
