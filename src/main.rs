//! Breed Catalog CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use breed_catalog::cli::{Cli, Commands};
use breed_catalog::domain::models::Config;
use breed_catalog::infrastructure::config::ConfigLoader;
use breed_catalog::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli).context("Failed to load configuration") {
        Ok(config) => config,
        Err(err) => breed_catalog::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => breed_catalog::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::SubBreeds(args) => {
            breed_catalog::cli::commands::sub_breeds::execute(args, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        breed_catalog::cli::handle_error(err, cli.json);
    }
}
