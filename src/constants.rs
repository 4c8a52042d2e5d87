//! Application constants for the charging station API
//!
//! This module contains the dataset column names, default values, and
//! server settings used throughout the application.

// =============================================================================
// Dataset Source Constants
// =============================================================================

/// Default location of the charging station CSV export
pub const DEFAULT_DATASET_PATH: &str = "data/ricarica_colonnine.csv";

/// Field delimiter used by the Milan open-data CSV exports
pub const DATASET_DELIMITER: u8 = b';';

/// Environment variable that overrides the dataset location
pub const DATASET_PATH_ENV_VAR: &str = "COLONNINE_DATASET";

// =============================================================================
// Dataset Column Names
// =============================================================================

/// Column names in the charging station CSV
///
/// Header matching is case-insensitive and order-independent; columns not
/// listed here are ignored.
pub mod columns {
    /// City area (NIL) the station belongs to
    pub const NOME_NIL: &str = "nome_nil";

    /// Street name, stored upper-case in the source data
    pub const NOME_VIA: &str = "nome_via";

    /// Full address of the charging point
    pub const LOCALITA: &str = "localita";

    /// Operating provider
    pub const TITOLARE: &str = "titolare";

    /// Socket type installed at the point
    pub const INFRA: &str = "infra";

    /// Number of charging stations at the point
    pub const NUMERO_COL: &str = "numero_col";

    /// Charging point type code
    pub const TIPOLOGIA: &str = "tipologia";

    /// Charging point identifier
    pub const NUMERO_PDR: &str = "numero_pdr";

    /// Columns every usable dataset export must carry
    pub const REQUIRED: &[&str] = &[
        NOME_NIL, NOME_VIA, LOCALITA, TITOLARE, INFRA, NUMERO_COL, TIPOLOGIA, NUMERO_PDR,
    ];
}

// =============================================================================
// HTTP Server Defaults
// =============================================================================

/// Default bind address for the API server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the API server
pub const DEFAULT_PORT: u16 = 8080;
