//! Station catalog loading from the dataset CSV
//!
//! This module reads the semicolon-delimited open-data export into memory.
//! Malformed rows are skipped with a warning; a missing file or a header
//! without the required columns fails the whole load.

use super::StationCatalog;
use super::metadata::LoadStats;
use super::parser;
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl StationCatalog {
    /// Load the charging station catalog from a CSV export
    ///
    /// Reads the whole file eagerly and keeps the rows in source order, which
    /// the first-match query semantics depend on.
    ///
    /// # Arguments
    /// * `path` - Location of the CSV export
    /// * `delimiter` - Field delimiter of the export (the Milan open-data
    ///   portal uses semicolons)
    ///
    /// # Returns
    /// * `Result<(StationCatalog, LoadStats)>` - Catalog and loading statistics
    ///
    /// # Errors
    /// * Returns `Error::FileNotFound` if the dataset file doesn't exist
    /// * Returns `Error::CsvParsing` if the file or its header row can't be read
    /// * Returns `Error::DatasetFormat` if a required column is missing
    pub fn load_from_csv(path: &Path, delimiter: u8) -> Result<(Self, LoadStats)> {
        info!("Loading charging station catalog from: {}", path.display());

        let start_time = Instant::now();
        let mut catalog = Self::new(path.to_path_buf());
        let mut stats = LoadStats::new();
        let file = path.display().to_string();

        // Validate dataset path exists
        if !path.exists() {
            return Err(Error::file_not_found(file));
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)
            .map_err(|e| Error::csv_parsing(&file, "Failed to open dataset file", Some(e)))?;

        let headers = reader
            .headers()
            .map_err(|e| Error::csv_parsing(&file, "Failed to read header row", Some(e)))?
            .clone();

        let columns = parser::resolve_columns(&headers, &file)?;
        debug!("Resolved dataset columns: {:?}", columns);

        for (row_index, result) in reader.records().enumerate() {
            // Data rows follow the header line, so the first is line 2
            let row_number = row_index + 2;
            stats.rows_parsed += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    let error = Error::from(e);
                    warn!("Skipping unreadable row {}: {}", row_number, error);
                    stats.errors.push(format!("row {}: {}", row_number, error));
                    stats.rows_skipped += 1;
                    continue;
                }
            };

            match parser::parse_record(&record, &columns) {
                Ok(charging_record) => {
                    catalog.add_record(charging_record);
                    stats.records_loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping malformed row {}: {}", row_number, e);
                    stats.errors.push(format!("row {}: {}", row_number, e));
                    stats.rows_skipped += 1;
                }
            }
        }

        catalog.rows_parsed = stats.rows_parsed;
        stats.load_duration = start_time.elapsed();

        info!("Station catalog loaded: {}", stats.summary());

        Ok((catalog, stats))
    }
}
