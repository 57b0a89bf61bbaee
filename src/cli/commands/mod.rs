//! CLI command implementations.

pub mod sub_breeds;
