use actix_web::web;

use crate::app::services::station_catalog::StationCatalog;

/// Lists the street of every record registered in an area. Streets with
/// several charging records appear once per record.
#[tracing::instrument(skip(catalog))]
async fn list_addresses(
    name: web::Path<String>,
    catalog: web::Data<StationCatalog>,
) -> web::Json<Vec<String>> {
    web::Json(catalog.list_streets_in_area(&name))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/addresses/{name}").route(web::get().to(list_addresses)));
}
