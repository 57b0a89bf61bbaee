//! Domain models

pub mod config;
pub mod sub_breeds;

pub use config::{CacheConfig, CatalogConfig, Config, LoggingConfig};
pub use sub_breeds::SubBreeds;
