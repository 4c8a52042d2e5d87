use actix_web::web;

use crate::app::services::station_catalog::StationCatalog;

/// Lists the distinct city areas covered by the dataset, in the order
/// they first appear.
#[tracing::instrument(skip(catalog))]
async fn list_areas(catalog: web::Data<StationCatalog>) -> web::Json<Vec<String>> {
    web::Json(catalog.list_areas())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/areas").route(web::get().to(list_areas)));
}
