//! HTTP server assembly and lifecycle

use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::app::services::station_catalog::StationCatalog;
use crate::config::Config;
use crate::http::routes;
use crate::{Error, Result};

/// Serves the query API over the given catalog until the process stops.
///
/// The catalog is wrapped in shared application data once, so every
/// worker borrows the same immutable copy of the dataset.
///
/// # Arguments
///
/// * `config` - Server configuration with the address to bind
/// * `catalog` - Fully loaded station catalog to serve
///
/// # Errors
///
/// Returns an error when the address cannot be bound or the server
/// terminates abnormally.
pub async fn run(config: &Config, catalog: StationCatalog) -> Result<()> {
    let bind_address = config.bind_address();
    let catalog = web::Data::new(catalog);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .configure(routes::config)
    })
    .bind(&bind_address)
    .map_err(|e| Error::server(format!("Failed to bind {}", bind_address), e))?;

    info!("Serving charging station API on http://{}", bind_address);

    server
        .run()
        .await
        .map_err(|e| Error::server("Server terminated unexpectedly", e))
}
