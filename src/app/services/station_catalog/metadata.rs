//! Station catalog metadata and statistics tracking
//!
//! This module defines the data structures and functionality for tracking
//! catalog loading statistics and metadata.

use std::path::PathBuf;
use std::time::Instant;

/// Statistics about the catalog loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of data rows read from the source file
    pub rows_parsed: usize,

    /// Number of records loaded into the catalog
    pub records_loaded: usize,

    /// Number of rows skipped as malformed
    pub rows_skipped: usize,

    /// Time taken to load the catalog
    pub load_duration: std::time::Duration,

    /// Any errors encountered during loading
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            rows_parsed: 0,
            records_loaded: 0,
            rows_skipped: 0,
            load_duration: std::time::Duration::ZERO,
            errors: Vec::new(),
        }
    }

    /// Calculate the skipped-row rate as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.rows_parsed == 0 {
            0.0
        } else {
            (self.rows_skipped as f64 / self.rows_parsed as f64) * 100.0
        }
    }

    /// Calculate the loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.records_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Check if any errors occurred during loading
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} rows, loaded {} records ({:.1}% skipped) in {:.2}s",
            self.rows_parsed,
            self.records_loaded,
            self.skip_rate(),
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about the station catalog
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// Path to the CSV export the catalog was loaded from
    pub source_path: PathBuf,

    /// Total number of records in the catalog
    pub record_count: usize,

    /// Number of distinct city areas
    pub area_count: usize,

    /// Number of distinct providers
    pub provider_count: usize,

    /// Number of distinct socket types
    pub socket_type_count: usize,

    /// When the catalog was loaded
    pub load_time: Instant,

    /// Number of data rows read from the source file
    pub rows_parsed: usize,
}

impl CatalogMetadata {
    /// Get the age of the catalog since loading
    pub fn age(&self) -> std::time::Duration {
        self.load_time.elapsed()
    }

    /// Get a summary string of the catalog
    pub fn summary(&self) -> String {
        format!(
            "Catalog with {} records across {} areas from {} providers (age: {:.1}s)",
            self.record_count,
            self.area_count,
            self.provider_count,
            self.age().as_secs_f64()
        )
    }
}
