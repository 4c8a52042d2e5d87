//! Serve command implementation for the colonnine API CLI
//!
//! Loads the charging station dataset into an immutable in-memory catalog
//! and serves the HTTP query API over it until the process is stopped.

use super::shared::{load_catalog, resolve_dataset_path, setup_logging};
use crate::Result;
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::http::server;
use tracing::{debug, info};

/// Serve command runner for the colonnine API
///
/// Resolves the dataset location, loads it once, and hands the resulting
/// catalog to the HTTP server. The dataset is never reloaded while the
/// server runs.
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting colonnine API server");
    debug!("Serve arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let dataset_path = resolve_dataset_path(args.dataset_path.as_deref());
    let config = Config::default()
        .with_dataset_path(dataset_path)
        .with_host(args.host.clone())
        .with_port(args.port);

    let (catalog, _) = load_catalog(&config)?;
    info!("Catalog ready: {}", catalog.metadata().summary());

    server::run(&config, catalog).await
}
