//! Configuration management for the charging station API.
//!
//! Provides the runtime settings shared by the HTTP server and the
//! dataset inspection command.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DATASET_DELIMITER, DEFAULT_DATASET_PATH, DEFAULT_HOST, DEFAULT_PORT};

/// Global configuration for the charging station API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the charging station CSV export
    pub dataset_path: PathBuf,

    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Field delimiter of the dataset file
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            delimiter: DATASET_DELIMITER,
        }
    }
}

impl Config {
    /// Create configuration with a custom dataset location
    pub fn with_dataset_path(mut self, dataset_path: PathBuf) -> Self {
        self.dataset_path = dataset_path;
        self
    }

    /// Create configuration with a custom bind address
    pub fn with_host(mut self, host: String) -> Self {
        self.host = host;
        self
    }

    /// Create configuration with a custom port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create configuration with a custom field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Get the host:port pair the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
