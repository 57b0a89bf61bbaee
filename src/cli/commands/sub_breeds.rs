//! `sub-breeds` command.

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::cache::CachingBreedFetcher;
use crate::cli::models::{LookupOutcome, LookupReport};
use crate::cli::output::TableFormatter;
use crate::cli::types::SubBreedsArgs;
use crate::domain::models::Config;
use crate::domain::ports::BreedFetcher;
use crate::infrastructure::dog_api::DogApiBreedFetcher;

/// Handle the sub-breeds command
///
/// Looks up every breed against the configured catalog, prints the results,
/// and fails if any breed could not be resolved.
pub async fn execute(args: SubBreedsArgs, config: &Config, json: bool) -> Result<()> {
    let remote = DogApiBreedFetcher::with_config(&config.catalog)
        .context("Failed to create dog.ceo client")?;

    let report = if config.cache.enabled && !args.no_cache {
        let fetcher = CachingBreedFetcher::new(remote);
        let results = lookup_all(&fetcher, &args.breeds).await;
        LookupReport {
            results,
            calls_made: Some(fetcher.calls_made()),
        }
    } else {
        LookupReport {
            results: lookup_all(&remote, &args.breeds).await,
            calls_made: None,
        }
    };

    print_report(&report, json)?;

    let missing = report.results.iter().filter(|r| !r.is_found()).count();
    if missing > 0 {
        anyhow::bail!(
            "{missing} of {} breed{} not found",
            report.results.len(),
            if report.results.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}

/// Look up each breed in order, keeping failures alongside successes.
pub async fn lookup_all<F: BreedFetcher + ?Sized>(fetcher: &F, breeds: &[String]) -> Vec<LookupOutcome> {
    let mut outcomes = Vec::with_capacity(breeds.len());
    for breed in breeds {
        let result = fetcher.sub_breeds(breed).await;
        outcomes.push(LookupOutcome::new(breed, result));
    }
    info!(
        requested = breeds.len(),
        found = outcomes.iter().filter(|o| o.is_found()).count(),
        "breed lookups finished"
    );
    outcomes
}

fn print_report(report: &LookupReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{}", TableFormatter::new().format_lookups(&report.results));
    if let Some(calls) = report.calls_made {
        println!(
            "\n{calls} catalog request{} for {} lookup{}",
            if calls == 1 { "" } else { "s" },
            report.results.len(),
            if report.results.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
