//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command-line arguments.
#[derive(Parser)]
#[command(name = "breed-catalog")]
#[command(about = "Look up dog sub-breeds from the dog.ceo catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .breed-catalog/
    #[arg(short, long, global = true, env = "BREED_CATALOG_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List the sub-breeds of one or more breeds
    SubBreeds(SubBreedsArgs),
}

/// Arguments of `sub-breeds`.
#[derive(Args, Debug, Clone)]
pub struct SubBreedsArgs {
    /// Breed names, looked up in order (case-insensitive)
    #[arg(required = true, num_args = 1..)]
    pub breeds: Vec<String>,

    /// Query the catalog for every name, even repeated ones
    #[arg(long)]
    pub no_cache: bool,
}
