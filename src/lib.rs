//! Colonnine API Library
//!
//! A Rust library for serving read-only queries over the City of Milan's
//! public electric-vehicle charging station dataset.
//!
//! This library provides tools for:
//! - Loading the semicolon-delimited charging station CSV into an immutable in-memory catalog
//! - Filtering, grouping, and aggregating catalog records by area, street, provider, and zone
//! - Serving the catalog queries over HTTP with actix-web
//! - Inspecting the dataset from the command line
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod station_catalog;
    }
}

// HTTP API modules
pub mod http {
    pub mod errors;
    pub mod routes;
    pub mod server;
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChargingPoint, ChargingRecord, Lookup};
pub use app::services::station_catalog::StationCatalog;
pub use config::Config;

/// Result type alias for the charging station API
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for catalog and API operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Dataset header or layout error
    #[error("Dataset format error in file '{file}': {message}")]
    DatasetFormat { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// HTTP server startup or shutdown error
    #[error("Server error: {message}")]
    Server {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a dataset format error
    pub fn dataset_format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DatasetFormat {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a server error with context
    pub fn server(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Server {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversion for row-level CSV read failures
impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
