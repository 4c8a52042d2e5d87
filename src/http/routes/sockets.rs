use actix_web::web;

use crate::app::models::Lookup;
use crate::app::services::station_catalog::StationCatalog;
use crate::http::errors::ApiError;

/// Renders socket types as a bracketed list of single quoted values,
/// e.g. `['AC Normal', 'DC Fast']`.
fn format_socket_list(socket_types: &[String]) -> String {
    let quoted: Vec<String> = socket_types
        .iter()
        .map(|socket_type| format!("'{}'", socket_type))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Reports the socket types available in a zone, or a 404 when the zone
/// is unknown.
#[tracing::instrument(err, skip(catalog))]
async fn socket_types_by_zone(
    zone: web::Path<String>,
    catalog: web::Data<StationCatalog>,
) -> Result<web::Json<String>, ApiError> {
    let zone = zone.to_uppercase();
    match catalog.list_socket_types_by_zone(&zone) {
        Lookup::Found(socket_types) => Ok(web::Json(format!(
            "In {} the type of socket is {}",
            zone,
            format_socket_list(&socket_types)
        ))),
        Lookup::NotFound => Err(ApiError::ZoneNotFound { zone }),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/socket_types_by_zone/{zone}").route(web::get().to(socket_types_by_zone)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_socket_list() {
        assert_eq!(format_socket_list(&[]), "[]");
        assert_eq!(
            format_socket_list(&["AC Normal".to_string()]),
            "['AC Normal']"
        );
        assert_eq!(
            format_socket_list(&["AC Normal".to_string(), "DC Fast".to_string()]),
            "['AC Normal', 'DC Fast']"
        );
    }
}
