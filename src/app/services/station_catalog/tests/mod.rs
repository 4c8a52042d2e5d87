//! Shared test utilities and fixtures for station catalog tests

use crate::app::models::ChargingRecord;
use crate::app::services::station_catalog::StationCatalog;
use std::fs;
use std::path::{Path, PathBuf};


/// Create a test record with standard parameters
#[allow(clippy::too_many_arguments)]
pub fn create_test_record(
    area: &str,
    street: &str,
    locality: &str,
    provider: &str,
    socket_type: &str,
    station_count: u32,
    point_type: &str,
    point_id: &str,
) -> ChargingRecord {
    ChargingRecord::new(
        area.to_string(),
        street.to_string(),
        locality.to_string(),
        provider.to_string(),
        socket_type.to_string(),
        station_count,
        point_type.to_string(),
        point_id.to_string(),
    )
    .unwrap()
}

/// Create a catalog populated with a representative slice of the dataset
///
/// The fixture covers the cases the queries care about: one area with
/// several records on the same street, a street whose name is a prefix of
/// another street, one street with two providers, one zone with two socket
/// types, and one street with zero installed stations.
pub fn create_test_catalog() -> StationCatalog {
    let mut catalog = StationCatalog::new(PathBuf::from("/test/ricarica_colonnine.csv"));

    let records = vec![
        create_test_record("Duomo", "VIA LARGA", "VIA LARGA 2", "A2A E-moby", "AC Normal", 1, "N", "6"),
        create_test_record("Duomo", "VIA LARGA", "VIA LARGA 7", "A2A E-moby", "AC Normal", 1, "N", "7"),
        create_test_record("Duomo", "VIA LARGA", "VIA LARGA 7", "A2A E-moby", "AC Normal", 1, "N", "8"),
        create_test_record("Ghisolfa", "VIA ALGARDI ALESSANDRO", "VIA ALGARDI ALESSANDRO 4", "Sorgenia", "AC Normal", 2, "N", "10"),
        create_test_record("Corsica", "CORSO INDIPENDENZA", "CORSO INDIPENDENZA 1", "A2A Energy Solutions", "DC Fast", 4, "C", "11"),
        create_test_record("Corsica", "CORSO INDIPENDENZA", "CORSO INDIPENDENZA 5", "Be Charge", "AC Normal", 2, "N", "12"),
        create_test_record("Isola", "VIA BORSIERI PIETRO", "VIA BORSIERI PIETRO 26", "Enel X", "AC Normal", 1, "N", "13"),
        create_test_record("Isola", "VIA BORSIERI PIETRO", "VIA BORSIERI PIETRO 26", "Enel X", "DC Fast", 1, "C", "14"),
        create_test_record("Duomo", "VIA LARGA 7", "VIA LARGA 9", "A2A E-moby", "AC Normal", 5, "N", "15"),
        create_test_record("Navigli", "RIPA DI PORTA TICINESE", "RIPA TICINESE 9", "Tesla", "DC Fast", 0, "C", "16"),
    ];

    for record in records {
        catalog.add_record(record);
    }

    catalog
}

/// Areas of the test catalog in first-appearance order
pub const TEST_AREAS: &[&str] = &["Duomo", "Ghisolfa", "Corsica", "Isola", "Navigli"];

/// A well-formed dataset export in the open-data portal layout
///
/// The column order differs from the record field order, one header is
/// upper-case, and an extra column is present; loading must cope with all
/// three. The next-to-last row carries a trailing space in the street name
/// and the last row leaves the station count empty.
pub const SAMPLE_DATASET: &str = "\
id_nil;NOME_VIA;localita;nome_nil;titolare;numero_col;infra;tipologia;numero_pdr
1;VIA LARGA;VIA LARGA 2;Duomo;A2A E-moby;1;AC Normal;N;6
1;VIA LARGA;VIA LARGA 7;Duomo;A2A E-moby;1;AC Normal;N;7
1;VIA LARGA;VIA LARGA 7;Duomo;A2A E-moby;1;AC Normal;N;8
2;VIA ALGARDI ALESSANDRO;VIA ALGARDI ALESSANDRO 4;Ghisolfa;Sorgenia;2;AC Normal;N;10
3;CORSO INDIPENDENZA;CORSO INDIPENDENZA 1;Corsica;A2A Energy Solutions;4;DC Fast;C;11
3;CORSO INDIPENDENZA;CORSO INDIPENDENZA 5;Corsica;Be Charge;2;AC Normal;N;12
4;PIAZZA EDISON TOMMASO ;PIAZZA EDISON TOMMASO 1;Duomo;A2A E-moby;1;AC Normal;N;13
5;RIPA DI PORTA TICINESE;RIPA TICINESE 9;Navigli;Tesla;;DC Fast;C;14
";

/// A dataset export with rows the loader must skip
///
/// Row 3 has an empty street name, row 4 a non-numeric station count, and
/// row 5 fewer fields than the header.
pub const MALFORMED_DATASET: &str = "\
nome_nil;nome_via;localita;titolare;infra;numero_col;tipologia;numero_pdr
Duomo;VIA LARGA;VIA LARGA 2;A2A E-moby;AC Normal;1;N;6
Duomo;;VIA LARGA 7;A2A E-moby;AC Normal;1;N;7
Duomo;VIA LARGA;VIA LARGA 7;A2A E-moby;AC Normal;many;N;8
Corsica;CORSO INDIPENDENZA
Isola;VIA BORSIERI PIETRO;VIA BORSIERI PIETRO 26;Enel X;AC Normal;1;N;13
";

/// A dataset export missing the provider column
pub const MISSING_COLUMN_DATASET: &str = "\
nome_nil;nome_via;localita;infra;numero_col;tipologia;numero_pdr
Duomo;VIA LARGA;VIA LARGA 2;AC Normal;1;N;6
";

/// Write a dataset export into a test directory
pub fn write_test_dataset(dir: &Path, filename: &str, content: &str) -> std::io::Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}
