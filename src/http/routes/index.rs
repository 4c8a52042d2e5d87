use actix_web::{HttpResponse, web};
use serde_json::json;

/// Liveness greeting at the API root.
async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "Hello": "World" }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(read_root)));
}
