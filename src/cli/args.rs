//! Command-line argument definitions for the colonnine API
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Milan charging station API
///
/// Loads the city of Milan's electric vehicle charging station dataset
/// into memory and answers questions about it over a small HTTP API.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "colonnine-api",
    version,
    about = "Serve Milan's electric vehicle charging station dataset over HTTP",
    long_about = "Loads the city of Milan's open dataset of electric vehicle charging \
                  stations from CSV into an in-memory catalog and serves a small read-only \
                  HTTP API over it: city areas, addresses, providers, station counts and \
                  socket types."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the colonnine API
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the dataset and serve the HTTP query API (default command)
    Serve(ServeArgs),
    /// Summarize the dataset without starting a server
    Inspect(InspectArgs),
}

/// Arguments for the serve command (main HTTP server)
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    /// Path to the charging station dataset
    ///
    /// A semicolon-delimited CSV export of Milan's charging station registry.
    /// If not specified, the COLONNINE_DATASET environment variable is
    /// consulted, then the bundled data/ricarica_colonnine.csv.
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "FILE",
        help = "Path to the charging station CSV dataset"
    )]
    pub dataset_path: Option<PathBuf>,

    /// Host address to bind the HTTP server to
    #[arg(
        long = "host",
        value_name = "ADDR",
        default_value = DEFAULT_HOST,
        help = "Host address to bind"
    )]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        default_value_t = DEFAULT_PORT,
        help = "Port to bind"
    )]
    pub port: u16,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (dataset summary reports)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Path to the charging station dataset
    ///
    /// Same resolution order as the serve command: this flag, then the
    /// COLONNINE_DATASET environment variable, then the bundled default.
    #[arg(
        short = 'd',
        long = "dataset",
        value_name = "FILE",
        help = "Path to the charging station CSV dataset"
    )]
    pub dataset_path: Option<PathBuf>,

    /// Output format for the dataset report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the dataset report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the dataset report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the dataset report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable reports
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ServeArgs {
    /// Validate the serve command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate dataset path exists (only if explicitly provided)
        if let Some(dataset_path) = &self.dataset_path {
            if !dataset_path.exists() {
                return Err(Error::configuration(format!(
                    "Dataset file does not exist: {}",
                    dataset_path.display()
                )));
            }

            if !dataset_path.is_file() {
                return Err(Error::configuration(format!(
                    "Dataset path is not a file: {}",
                    dataset_path.display()
                )));
            }
        }

        // Validate bind address
        if self.host.trim().is_empty() {
            return Err(Error::configuration(
                "Host address cannot be empty".to_string(),
            ));
        }

        if self.port == 0 {
            return Err(Error::configuration(
                "Port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate dataset path exists if specified
        if let Some(dataset_path) = &self.dataset_path {
            if !dataset_path.exists() {
                return Err(Error::configuration(format!(
                    "Dataset file does not exist: {}",
                    dataset_path.display()
                )));
            }

            if !dataset_path.is_file() {
                return Err(Error::configuration(format!(
                    "Dataset path is not a file: {}",
                    dataset_path.display()
                )));
            }
        }

        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn", // Default level for inspect command
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            dataset_path: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            verbose: 0,
            quiet: false,
        }
    }
}
