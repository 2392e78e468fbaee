//! Command-line entry point: load the configuration, run the queue, print the report.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use lfg_dungeon_queue::builders::CoordinatorBuilder;
use lfg_dungeon_queue::config::FileConfigProvider;
use lfg_dungeon_queue::core::AppResult;
use lfg_dungeon_queue::util::init_tracing;

/// Simulate a fixed pool of dungeon instances serving a queue of parties.
#[derive(Debug, Parser)]
#[command(name = "lfg-dungeon-queue", version, about)]
struct Cli {
    /// Configuration file (`.json`, or `key value` lines).
    #[arg(long, env = "LFG_CONFIG", default_value = "config.txt")]
    config: PathBuf,

    /// Seed for clear-time draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock milliseconds per clear-time second.
    #[arg(long, default_value_t = 1000)]
    time_unit_ms: u64,

    /// Print the final report as JSON after the summary.
    #[arg(long)]
    json: bool,
}

fn main() -> AppResult<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();

    let provider = Arc::new(FileConfigProvider::new(&cli.config));
    let mut builder = CoordinatorBuilder::from_provider(provider)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?
        .with_time_unit(Duration::from_millis(cli.time_unit_ms));
    if let Some(seed) = cli.seed {
        builder = builder.with_seed(seed);
    }

    let report = builder.build().run().context("running dungeon queue")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
