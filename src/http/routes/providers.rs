use actix_web::web;

use crate::app::models::{ChargingPoint, Lookup};
use crate::app::services::station_catalog::StationCatalog;

/// Reports which provider operates the charging station on a street.
#[tracing::instrument(skip(catalog))]
async fn search_provider(
    street_name: web::Path<String>,
    catalog: web::Data<StationCatalog>,
) -> web::Json<String> {
    let street = street_name.to_uppercase();
    let message = match catalog.find_provider_for_street(&street) {
        Lookup::Found(provider) => format!(
            "The provider for the charging station present in {} is {}",
            street, provider
        ),
        Lookup::NotFound => format!(
            "Unfortunately the street name {} is not present in our database",
            street
        ),
    };
    web::Json(message)
}

/// Lists every charging point a provider operates.
#[tracing::instrument(skip(catalog))]
async fn lookfor_provider(
    provider_name: web::Path<String>,
    catalog: web::Data<StationCatalog>,
) -> web::Json<Vec<ChargingPoint>> {
    web::Json(catalog.list_points_by_provider(&provider_name))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/module")
            .service(web::resource("/search/{street_name}").route(web::get().to(search_provider)))
            .service(
                web::resource("/lookfor/{provider_name}").route(web::get().to(lookfor_provider)),
            ),
    );
}
