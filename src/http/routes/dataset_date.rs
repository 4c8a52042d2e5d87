use actix_web::web;
use chrono::Local;
use serde::Serialize;

#[derive(Serialize)]
struct DateResponse {
    date: String,
}

/// Reports the server's local date and time in ISO 8601 format with
/// microsecond precision.
async fn get_date() -> web::Json<DateResponse> {
    web::Json(DateResponse {
        date: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/get-date").route(web::get().to(get_date)));
}
