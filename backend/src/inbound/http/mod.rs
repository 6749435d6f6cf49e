//! HTTP inbound adapter exposing the REST endpoints.
//!
//! ```text
//! /customers        /customers/{id}        /customers/{id}/cars
//! /suppliers        /suppliers/{id}
//! /cars             /cars/{id}             /cars/{id}/customers
//! /customer-cars    /customer-cars/{id}
//! ```

use actix_web::web;

pub mod cars;
pub mod customer_cars;
pub mod customers;
pub mod dto;
pub mod error;
pub mod health;
mod resources;
pub mod schemas;
pub mod state;
pub mod suppliers;
pub mod validation;

pub use crate::domain::ApiResult;

/// Register the resource endpoints and the extractor error mapping.
///
/// Health probes and API docs are mounted separately by the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .service(customers::create_customer)
        .service(customers::list_customers)
        .service(customers::list_customer_cars)
        .service(customers::get_customer)
        .service(customers::update_customer)
        .service(customers::delete_customer)
        .service(suppliers::create_supplier)
        .service(suppliers::list_suppliers)
        .service(suppliers::get_supplier)
        .service(suppliers::update_supplier)
        .service(suppliers::delete_supplier)
        .service(cars::create_car)
        .service(cars::list_cars)
        .service(cars::list_car_customers)
        .service(cars::get_car)
        .service(cars::update_car)
        .service(cars::delete_car)
        .service(customer_cars::create_customer_car)
        .service(customer_cars::list_customer_car_links)
        .service(customer_cars::get_customer_car)
        .service(customer_cars::update_customer_car)
        .service(customer_cars::delete_customer_car);
}
