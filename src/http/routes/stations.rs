use actix_web::web;

use crate::app::models::Lookup;
use crate::app::services::station_catalog::StationCatalog;

/// Reports how many charging stations are installed along a street.
#[tracing::instrument(skip(catalog))]
async fn count_charging_stations(
    street_name: web::Path<String>,
    catalog: web::Data<StationCatalog>,
) -> web::Json<String> {
    let street = street_name.to_uppercase();
    let message = match catalog.count_stations_on_street(&street) {
        Lookup::Found(total) => {
            format!("The number of charging stations in {} is {}", street, total)
        }
        Lookup::NotFound => format!(
            "Unfortunately, the street '{}' is not present in the dataset.",
            street
        ),
    };
    web::Json(message)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/get_charging_stations/{street_name}")
            .route(web::get().to(count_charging_stations)),
    );
}
