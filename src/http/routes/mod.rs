//! HTTP route configuration
//!
//! Each submodule owns one endpoint (or one scope of endpoints) and
//! exposes an `init_routes` function. [`config`] assembles them all
//! onto an actix `App`.

mod addresses;
mod areas;
mod dataset_date;
mod index;
mod providers;
mod sockets;
mod stations;

use actix_web::web;

/// Registers every route of the charging station API.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(index::init_routes)
        .configure(areas::init_routes)
        .configure(addresses::init_routes)
        .configure(providers::init_routes)
        .configure(stations::init_routes)
        .configure(sockets::init_routes)
        .configure(dataset_date::init_routes);
}
