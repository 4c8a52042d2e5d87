//! Integration tests for the HTTP query API
//!
//! These tests boot the full actix application over a small dataset
//! fixture and exercise every route end to end, including the exact
//! response bodies the API promises.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use colonnine_api::app::services::station_catalog::StationCatalog;
use colonnine_api::constants::DATASET_DELIMITER;
use colonnine_api::http::routes;
use serde_json::json;
use tempfile::TempDir;

const TEST_DATASET: &str = "\
nome_nil;nome_via;localita;titolare;infra;numero_col;tipologia;numero_pdr
Duomo;VIA LARGA;VIA LARGA 2;A2A E-moby;AC Normal;1;N;6
Duomo;VIA LARGA;VIA LARGA 7;A2A E-moby;AC Normal;1;N;7
Duomo;VIA LARGA;VIA LARGA 7;A2A E-moby;DC Fast;1;C;8
Ghisolfa;VIA ALGARDI ALESSANDRO;VIA ALGARDI ALESSANDRO 4;Sorgenia;AC Normal;2;N;10
Corsica;CORSO INDIPENDENZA;CORSO INDIPENDENZA 1;A2A Energy Solutions;DC Fast;4;C;11
Corsica;CORSO INDIPENDENZA;CORSO INDIPENDENZA 5;Be Charge;AC Normal;2;N;12
Navigli;RIPA DI PORTA TICINESE;RIPA TICINESE 9;Tesla;DC Fast;0;C;16
";

/// Load the test dataset into a catalog, exactly as the serve command does
fn load_test_catalog() -> StationCatalog {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ricarica_colonnine.csv");
    std::fs::write(&path, TEST_DATASET).unwrap();

    let (catalog, stats) = StationCatalog::load_from_csv(&path, DATASET_DELIMITER).unwrap();
    assert_eq!(stats.rows_skipped, 0, "test dataset must load cleanly");
    catalog
}

#[actix_web::test]
async fn test_root_returns_greeting() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "Hello": "World" }));
}

#[actix_web::test]
async fn test_areas_lists_distinct_areas_in_dataset_order() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/areas").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(body, vec!["Duomo", "Ghisolfa", "Corsica", "Navigli"]);
}

#[actix_web::test]
async fn test_addresses_lists_streets_with_duplicates() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/addresses/Duomo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(body, vec!["VIA LARGA", "VIA LARGA", "VIA LARGA"]);

    // Area lookup ignores case
    let req = test::TestRequest::get().uri("/addresses/dUoMo").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Vec<String> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 3);
}

#[actix_web::test]
async fn test_addresses_unknown_area_is_empty_list() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/addresses/Atlantide")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<String> = test::read_body_json(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_provider_search_reports_first_matching_record() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    // Input case does not matter; the reply always shows the street upper-cased
    let req = test::TestRequest::get()
        .uri("/module/search/via%20larga")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = test::read_body_json(resp).await;
    assert_eq!(
        body,
        "The provider for the charging station present in VIA LARGA is A2A E-moby"
    );

    // Two providers share this street; the first record in the dataset wins
    let req = test::TestRequest::get()
        .uri("/module/search/CORSO%20INDIPENDENZA")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: String = test::read_body_json(resp).await;
    assert_eq!(
        body,
        "The provider for the charging station present in CORSO INDIPENDENZA is A2A Energy Solutions"
    );
}

#[actix_web::test]
async fn test_provider_search_unknown_street_is_200_with_message() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/module/search/via%20inesistente")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = test::read_body_json(resp).await;
    assert_eq!(
        body,
        "Unfortunately the street name VIA INESISTENTE is not present in our database"
    );
}

#[actix_web::test]
async fn test_provider_lookfor_lists_charging_points() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/module/lookfor/sorgenia")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([{
            "localita": "Via algardi alessandro 4",
            "tipologia": "N",
            "numero_pdr": "10"
        }])
    );
}

#[actix_web::test]
async fn test_provider_lookfor_unknown_provider_is_empty_list() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/module/lookfor/Edison")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_station_count_sums_street_records() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/get_charging_stations/via%20larga")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = test::read_body_json(resp).await;
    assert_eq!(body, "The number of charging stations in VIA LARGA is 3");
}

#[actix_web::test]
async fn test_station_count_zero_is_still_a_count() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/get_charging_stations/RIPA%20DI%20PORTA%20TICINESE")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = test::read_body_json(resp).await;
    assert_eq!(
        body,
        "The number of charging stations in RIPA DI PORTA TICINESE is 0"
    );
}

#[actix_web::test]
async fn test_station_count_unknown_street_is_200_with_message() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/get_charging_stations/VIA%20INESISTENTE")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = test::read_body_json(resp).await;
    assert_eq!(
        body,
        "Unfortunately, the street 'VIA INESISTENTE' is not present in the dataset."
    );
}

#[actix_web::test]
async fn test_socket_types_lists_zone_sockets() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/socket_types_by_zone/via%20larga%207")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = test::read_body_json(resp).await;
    assert_eq!(
        body,
        "In VIA LARGA 7 the type of socket is ['AC Normal', 'DC Fast']"
    );
}

#[actix_web::test]
async fn test_socket_types_unknown_zone_is_404() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/socket_types_by_zone/zona%20inesistente")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "error": "Unfortunately, the zone ZONA INESISTENTE is not present in the dataset"
        })
    );
}

#[actix_web::test]
async fn test_get_date_returns_parseable_local_timestamp() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(load_test_catalog()))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/get-date").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let date = body["date"].as_str().unwrap();
    assert!(
        chrono::NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
        "date should be ISO 8601: {}",
        date
    );
}
