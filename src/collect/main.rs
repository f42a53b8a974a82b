//! Lodging collection run.
//!
//! Sweeps the configured bounding box, queries Google Places at every grid
//! point and writes accepted lodgings to a `|||`-delimited file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lodgegrid::output::write_records;
use lodgegrid::{Collector, Config, PlacesClient};

#[derive(Parser, Debug)]
#[command(name = "collect")]
#[command(about = "Collect lodging places inside a bounding box from Google Places")]
struct Args {
    /// TOML config file; built-in defaults are used for anything it omits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Google Places API key
    #[arg(long, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Output file (overrides the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if args.api_key.is_some() {
        config.api_key = args.api_key;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    config.validate().context("Refusing to start")?;

    let grid = config.grid()?;
    let client = PlacesClient::new(&config)?;

    let total = grid.len_hint();
    info!(
        "Sweeping {} grid points x {} categories",
        total,
        config.categories.len()
    );

    let mut collector = Collector::new(&client, &config.categories, config.radius_m);
    if !args.no_progress {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} points",
                )?
                .progress_chars("#>-"),
        );
        collector = collector.with_progress(pb);
    }

    let records = collector.collect(&grid).await;

    write_records(&config.output, &records)?;
    println!("Дані збережено у {}", config.output.display());

    Ok(())
}
