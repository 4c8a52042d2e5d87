//! Data models for the charging station catalog
//!
//! This module contains the core data structures for representing charging
//! station records from the City of Milan open-data export, plus the
//! projections returned by the query API.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Charging Record Structure
// =============================================================================

/// A single row of the charging station dataset
///
/// Each record describes one charging point installation: where it is, who
/// operates it, and what it offers. Field names follow English naming while
/// the serde renames preserve the Italian column names of the source data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChargingRecord {
    /// City area (NIL) the station belongs to (e.g., "DUOMO")
    #[serde(rename = "nome_nil")]
    pub area: String,

    /// Street name, upper-case in the source data (e.g., "VIA LARGA")
    #[serde(rename = "nome_via")]
    pub street: String,

    /// Full address of the charging point, including the street number
    #[serde(rename = "localita")]
    pub locality: String,

    /// Operating provider (e.g., "A2A Energy Solutions")
    #[serde(rename = "titolare")]
    pub provider: String,

    /// Socket type installed at the point (e.g., "AC Normal")
    #[serde(rename = "infra")]
    pub socket_type: String,

    /// Number of charging stations installed at the point
    #[serde(rename = "numero_col")]
    pub station_count: u32,

    /// Charging point type code
    #[serde(rename = "tipologia")]
    pub point_type: String,

    /// Charging point identifier
    #[serde(rename = "numero_pdr")]
    pub point_id: String,
}

impl ChargingRecord {
    /// Create a new ChargingRecord with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        area: String,
        street: String,
        locality: String,
        provider: String,
        socket_type: String,
        station_count: u32,
        point_type: String,
        point_id: String,
    ) -> Result<Self> {
        let record = Self {
            area,
            street,
            locality,
            provider,
            socket_type,
            station_count,
            point_type,
            point_id,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record data for consistency
    pub fn validate(&self) -> Result<()> {
        // Every query path keys on the street name
        if self.street.trim().is_empty() {
            return Err(Error::data_validation(
                "Street name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Charging Point Projection
// =============================================================================

/// Charging point details returned by the provider lookup
///
/// A reduced view of a [`ChargingRecord`] with the locality rendered in
/// display form (first letter upper-case, rest lower-case).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChargingPoint {
    /// Full address of the charging point, in display form
    #[serde(rename = "localita")]
    pub locality: String,

    /// Charging point type code
    #[serde(rename = "tipologia")]
    pub point_type: String,

    /// Charging point identifier
    #[serde(rename = "numero_pdr")]
    pub point_id: String,
}

impl From<&ChargingRecord> for ChargingPoint {
    fn from(record: &ChargingRecord) -> Self {
        Self {
            locality: capitalize_phrase(&record.locality),
            point_type: record.point_type.clone(),
            point_id: record.point_id.clone(),
        }
    }
}

/// Render a phrase in display form: first character upper-case, the rest
/// lower-case (e.g., "VIA LARGA 7" becomes "Via larga 7")
pub fn capitalize_phrase(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// =============================================================================
// Query Outcome
// =============================================================================

/// Outcome of a catalog query that distinguishes "no match" from a result
///
/// A street with zero installed stations still yields `Found(0)`; `NotFound`
/// means the key itself is absent from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The key exists in the dataset
    Found(T),
    /// The key does not appear in the dataset
    NotFound,
}
