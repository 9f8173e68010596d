//! # bcrypt-bench runner
//!
//! Entry point for a benchmark run.
//!
//! ## Startup sequence
//!
//! 1. Initialize tracing (level from `BENCH_LOG`, default `info`)
//! 2. Load `TrialConfig` from the JSON file named by `BENCH_CONFIG`,
//!    falling back to defaults (costs 10 and 12, warmup 2, measurement 3)
//! 3. Build the default target registry
//! 4. Run the sweep, single-threaded
//! 5. Print the partial-results report
//!
//! A configuration error (unreadable file, invalid values, unknown target
//! name) is the only failure that aborts the process; every target-level
//! failure is reported per pair and the sweep continues.

mod report;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bench_core::{PasswordGenerator, TrialConfig, TrialDriver};
use bench_targets::default_registry;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BENCH_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config().context("loading trial configuration")?;
    config.validate().context("validating trial configuration")?;
    info!(
        costs = ?config.costs,
        warmup = config.warmup_iterations,
        measurement = config.measurement_iterations,
        "starting benchmark trial"
    );

    let registry = default_registry();
    let driver = TrialDriver::new(config).context("creating trial driver")?;
    let mut input = PasswordGenerator::new();

    let trial_report = driver
        .run(&registry, &mut input)
        .context("running benchmark sweep")?;

    print!("{}", report::render(&trial_report));
    Ok(())
}

/// Load the trial configuration from `BENCH_CONFIG`, or defaults.
fn load_config() -> Result<TrialConfig> {
    match std::env::var("BENCH_CONFIG") {
        Ok(path) => read_config(Path::new(&path)),
        Err(_) => Ok(TrialConfig::default()),
    }
}

fn read_config(path: &Path) -> Result<TrialConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
}
