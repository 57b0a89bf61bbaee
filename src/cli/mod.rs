//! Command-line interface for the breed catalog.

pub mod commands;
pub mod models;
pub mod output;
pub mod types;

pub use types::{Cli, Commands, SubBreedsArgs};

/// Print a command failure and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    if json {
        let chain: Vec<String> = err.chain().map(ToString::to_string).collect();
        eprintln!(
            "{}",
            serde_json::json!({ "error": err.to_string(), "causes": &chain[1..] })
        );
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
