//! Inspect command implementation for the colonnine API CLI
//!
//! Loads the charging station dataset and reports what is in it, in
//! human-readable or JSON form, without starting a server. Useful for
//! checking a dataset copy before serving it.

use super::shared::{load_catalog, resolve_dataset_path, setup_logging};
use crate::app::models::ChargingRecord;
use crate::app::services::station_catalog::{LoadStats, StationCatalog};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Inspect command runner for the colonnine API
pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    // Set up logging
    setup_logging(args.get_log_level(), false)?;

    info!("Starting dataset inspection");
    debug!("Inspect arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let dataset_path = resolve_dataset_path(args.dataset_path.as_deref());
    let config = Config::default().with_dataset_path(dataset_path);

    let (catalog, stats) = load_catalog(&config)?;

    let report = match args.output_format {
        OutputFormat::Human => generate_human_report(&catalog, &stats),
        OutputFormat::Json => generate_json_report(&catalog, &stats)?,
    };

    write_report(&report, args.output_file.as_deref())
}

/// Count records per distinct value of a field, most frequent first.
/// Ties are broken alphabetically so report order is stable.
fn distribution(
    catalog: &StationCatalog,
    field: impl Fn(&ChargingRecord) -> &str,
) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in catalog.records() {
        *counts.entry(field(record).to_string()).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Sum of installed charging stations across all records
fn total_stations(catalog: &StationCatalog) -> u32 {
    catalog
        .records()
        .iter()
        .map(|record| record.station_count)
        .sum()
}

/// Generate human-readable dataset report
fn generate_human_report(catalog: &StationCatalog, load_stats: &LoadStats) -> String {
    let metadata = catalog.metadata();

    let mut output = format!(
        "📊 Milan Charging Station Dataset Report\n\
         =========================================\n\
         📁 Dataset: {}\n\
         🔌 Charging Records: {}\n\
         🏙️  City Areas: {}\n\
         🏭 Providers: {}\n\
         ⚡ Socket Types: {}\n\
         🔋 Installed Stations: {}\n\
         ⏱️  Load Time: {:.2}s\n\
         \n",
        metadata.source_path.display(),
        metadata.record_count,
        metadata.area_count,
        metadata.provider_count,
        metadata.socket_type_count,
        total_stations(catalog),
        load_stats.load_duration.as_secs_f64()
    );

    if !load_stats.errors.is_empty() {
        output.push_str(&format!(
            "⚠️  Load Errors: {} (see log for details)\n\n",
            load_stats.errors.len()
        ));
    }

    if !catalog.is_empty() {
        output.push_str("🏭 Provider Distribution:\n");
        for (provider, count) in &distribution(catalog, |record| record.provider.as_str()) {
            let percentage = (*count as f64 / catalog.record_count() as f64) * 100.0;
            output.push_str(&format!(
                "   • {}: {} records ({:.1}%)\n",
                provider, count, percentage
            ));
        }
        output.push('\n');

        output.push_str("⚡ Socket Type Distribution:\n");
        for (socket_type, count) in &distribution(catalog, |record| record.socket_type.as_str()) {
            output.push_str(&format!("   • {}: {} records\n", socket_type, count));
        }
    } else {
        output.push_str("The dataset contains no charging records.\n");
    }

    output
}

/// Generate JSON dataset report
fn generate_json_report(catalog: &StationCatalog, load_stats: &LoadStats) -> Result<String> {
    use serde_json::json;

    let metadata = catalog.metadata();

    let providers: Vec<_> = distribution(catalog, |record| record.provider.as_str())
        .into_iter()
        .map(|(name, records)| json!({ "name": name, "records": records }))
        .collect();

    let socket_types: Vec<_> = distribution(catalog, |record| record.socket_type.as_str())
        .into_iter()
        .map(|(name, records)| json!({ "name": name, "records": records }))
        .collect();

    let json_report = json!({
        "metadata": {
            "dataset_path": metadata.source_path,
            "record_count": metadata.record_count,
            "area_count": metadata.area_count,
            "provider_count": metadata.provider_count,
            "socket_type_count": metadata.socket_type_count,
            "total_stations": total_stations(catalog),
            "rows_parsed": load_stats.rows_parsed,
            "rows_skipped": load_stats.rows_skipped,
            "load_duration_seconds": load_stats.load_duration.as_secs_f64(),
            "load_errors": load_stats.errors.len(),
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "providers": providers,
        "socket_types": socket_types
    });

    serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::configuration(format!("Failed to serialize dataset report: {}", e)))
}

/// Write the report to the requested destination
fn write_report(report: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, report).map_err(|e| {
                Error::configuration(format!(
                    "Failed to write report to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Dataset report written to: {}", path.display());
        }
        None => {
            println!("{}", report);
        }
    }

    Ok(())
}
