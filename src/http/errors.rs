//! Error responses for the HTTP query API

use actix_web::{
    HttpResponse, error,
    http::{StatusCode, header::ContentType},
};
use serde_json::json;
use thiserror::Error;

/// Errors a request handler can surface to the client.
///
/// Most lookup misses in this API are answered with a 200 and an
/// explanatory message body. The zone query is the exception and
/// reports a missing zone as a real HTTP error.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unfortunately, the zone {zone} is not present in the dataset")]
    ZoneNotFound { zone: String },
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::ZoneNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let err_json = json!({ "error": self.to_string() });
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(err_json)
    }
}
