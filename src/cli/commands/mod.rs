//! Command implementations for the colonnine API CLI
//!
//! This module contains the command execution logic for the CLI
//! interface. Each command is implemented in its own module.

pub mod inspect;
pub mod serve;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the colonnine API
///
/// This function dispatches to the appropriate subcommand handler based on CLI args:
/// - `serve`: load the dataset and run the HTTP query API
/// - `inspect`: load the dataset and print a summary report
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
    }
}
