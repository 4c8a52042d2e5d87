//! Station catalog service holding the charging station dataset in memory
//!
//! This module provides the immutable in-memory table the query API runs
//! against. The catalog is loaded once from the Milan open-data CSV export
//! and preserves the source row order, which the query results depend on.

use crate::app::models::ChargingRecord;
use std::path::PathBuf;
use std::time::Instant;

pub mod loader;
pub mod metadata;
pub mod parser;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{CatalogMetadata, LoadStats};

/// In-memory catalog of charging station records
///
/// The catalog stores the dataset rows in source order. All queries scan the
/// records sequentially; first-match and first-seen semantics therefore
/// follow the row order of the CSV export.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    /// Dataset rows in source order
    pub(crate) records: Vec<ChargingRecord>,

    /// Path to the CSV export the catalog was loaded from
    pub(crate) source_path: PathBuf,

    /// Timestamp when the catalog was loaded
    pub(crate) load_time: Instant,

    /// Number of data rows read from the source file
    pub(crate) rows_parsed: usize,
}

impl StationCatalog {
    /// Create a new empty station catalog
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            records: Vec::new(),
            source_path,
            load_time: Instant::now(),
            rows_parsed: 0,
        }
    }

    /// Append a record, preserving insertion order
    pub fn add_record(&mut self, record: ChargingRecord) {
        self.records.push(record);
    }

    /// Get the dataset rows in source order
    pub fn records(&self) -> &[ChargingRecord] {
        &self.records
    }

    /// Get the total number of records in the catalog
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Check whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source_path: self.source_path.clone(),
            record_count: self.records.len(),
            area_count: self.distinct_count(|record| &record.area),
            provider_count: self.distinct_count(|record| &record.provider),
            socket_type_count: self.distinct_count(|record| &record.socket_type),
            load_time: self.load_time,
            rows_parsed: self.rows_parsed,
        }
    }

    /// Count distinct values of a record field
    fn distinct_count(&self, field: impl Fn(&ChargingRecord) -> &String) -> usize {
        let values: std::collections::HashSet<&String> =
            self.records.iter().map(field).collect();
        values.len()
    }
}
