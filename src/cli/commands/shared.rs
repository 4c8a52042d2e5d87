//! Shared components for CLI commands
//!
//! This module contains common helpers used across the CLI command
//! implementations: logging setup, dataset path resolution and catalog
//! loading.

use crate::Result;
use crate::app::services::station_catalog::{LoadStats, StationCatalog};
use crate::config::Config;
use crate::constants::{DATASET_PATH_ENV_VAR, DEFAULT_DATASET_PATH};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Set up structured logging for CLI commands
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("colonnine_api={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the dataset path from the CLI flag, the environment, or the
/// bundled default, in that order
pub fn resolve_dataset_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        debug!("Using dataset path from command line: {}", path.display());
        return path.to_path_buf();
    }

    if let Some(path) = std::env::var(DATASET_PATH_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
    {
        debug!(
            "Using dataset path from {}: {}",
            DATASET_PATH_ENV_VAR,
            path.display()
        );
        return path;
    }

    PathBuf::from(DEFAULT_DATASET_PATH)
}

/// Load the station catalog described by the configuration
pub fn load_catalog(config: &Config) -> Result<(StationCatalog, LoadStats)> {
    let (catalog, stats) = StationCatalog::load_from_csv(&config.dataset_path, config.delimiter)?;

    if stats.has_errors() {
        warn!(
            "{} rows were skipped while loading the dataset",
            stats.rows_skipped
        );
    }

    Ok((catalog, stats))
}
