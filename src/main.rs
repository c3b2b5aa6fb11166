use analytics::AnalyticsEngine;
use anyhow::Context;
use api_client::{HttpMarketDataSource, acquire_all};
use clap::Parser;
use configuration::{Config, init_tracing, load_config};
use enrichment::EnrichmentEngine;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use storage::ArtifactStore;
use tracing::error;

mod display;

/// Enriches the vehicle catalog with market comparisons and prints a market report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Optional TOML configuration file. Built-in defaults apply when it is absent.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

/// The main entry point: fetch, enrich, persist, reload, report.
#[tokio::main]
async fn main() -> ExitCode {
    let started = Instant::now();

    // A .env file is optional; it only supplies MARKET__* overrides.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Held until exit so the file appender flushes.
    let _log_guard = match init_tracing(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error initialising logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&config).await {
        error!(error = ?e, "Run aborted.");
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    println!("Run finished in {:.2} seconds.", started.elapsed().as_secs_f64());
    ExitCode::SUCCESS
}

/// Runs the enrichment pass, then the analytics pass over what it persisted.
async fn run(config: &Config) -> anyhow::Result<()> {
    let source = HttpMarketDataSource::new(&config.sources)
        .context("Failed to build the HTTP client")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    spinner.set_message("Fetching listings, benchmarks and currency rates...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let data = acquire_all(&source).await;
    spinner.finish_and_clear();

    let store = ArtifactStore::new(&config.storage.artifact_path);
    EnrichmentEngine::new(store.clone())
        .run(&data.listings, &data.benchmarks, &data.currency_rates)
        .await
        .context("Enrichment failed")?;

    // The artifact is fully written at this point; the analytics pass reads it back.
    let report = AnalyticsEngine::new()
        .analyze(&store)
        .await
        .context("Analysis failed")?;

    display::print_report(&report);
    Ok(())
}
