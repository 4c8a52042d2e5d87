//! Record parsing for the charging station CSV
//!
//! This module resolves the dataset's named columns against the header row
//! and converts individual data rows into [`ChargingRecord`] values.

use crate::app::models::ChargingRecord;
use crate::constants::columns;
use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column indices of the required dataset fields
///
/// Resolved once from the header row; row parsing is position-based after
/// that. Columns may appear in any order and extra columns are ignored.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub area: usize,
    pub street: usize,
    pub locality: usize,
    pub provider: usize,
    pub socket_type: usize,
    pub station_count: usize,
    pub point_type: usize,
    pub point_id: usize,
}

/// Resolve the required column indices from the header row
///
/// Header names are matched after trimming and lower-casing. A missing
/// required column makes the whole file unusable.
pub fn resolve_columns(headers: &StringRecord, file: &str) -> Result<ColumnMap> {
    let mut index_by_name = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        index_by_name.insert(header.trim().to_lowercase(), i);
    }

    let find = |name: &str| -> Result<usize> {
        index_by_name.get(name).copied().ok_or_else(|| {
            Error::dataset_format(file, format!("Missing required column '{}'", name))
        })
    };

    Ok(ColumnMap {
        area: find(columns::NOME_NIL)?,
        street: find(columns::NOME_VIA)?,
        locality: find(columns::LOCALITA)?,
        provider: find(columns::TITOLARE)?,
        socket_type: find(columns::INFRA)?,
        station_count: find(columns::NUMERO_COL)?,
        point_type: find(columns::TIPOLOGIA)?,
        point_id: find(columns::NUMERO_PDR)?,
    })
}

/// Parse a single data row into a ChargingRecord
///
/// String fields are kept verbatim, including surrounding whitespace, so the
/// catalog reproduces the source data exactly. An empty station count cell
/// is treated as zero.
pub fn parse_record(record: &StringRecord, columns: &ColumnMap) -> Result<ChargingRecord> {
    let area = field_value(record, columns.area, columns::NOME_NIL)?;
    let street = field_value(record, columns.street, columns::NOME_VIA)?;
    let locality = field_value(record, columns.locality, columns::LOCALITA)?;
    let provider = field_value(record, columns.provider, columns::TITOLARE)?;
    let socket_type = field_value(record, columns.socket_type, columns::INFRA)?;
    let point_type = field_value(record, columns.point_type, columns::TIPOLOGIA)?;
    let point_id = field_value(record, columns.point_id, columns::NUMERO_PDR)?;

    let raw_count = field_value(record, columns.station_count, columns::NUMERO_COL)?;
    let raw_count = raw_count.trim();
    let station_count: u32 = if raw_count.is_empty() {
        0
    } else {
        raw_count.parse().map_err(|_| {
            Error::data_validation(format!(
                "Invalid station count '{}': must be a non-negative integer",
                raw_count
            ))
        })?
    };

    // Validation of the assembled record happens in the model constructor
    ChargingRecord::new(
        area,
        street,
        locality,
        provider,
        socket_type,
        station_count,
        point_type,
        point_id,
    )
}

/// Helper function to get a cell value, failing on rows shorter than the header
fn field_value(record: &StringRecord, index: usize, name: &str) -> Result<String> {
    let value = record
        .get(index)
        .ok_or_else(|| Error::data_validation(format!("Missing value for column '{}'", name)))?;

    Ok(value.to_string())
}
