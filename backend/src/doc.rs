//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every resource endpoint, the health probes and the
//! payload schemas. The document backs Swagger UI in debug builds and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::dto::{
    AuditFields, CarRequest, CarResponse, CustomerCarRequest, CustomerCarResponse,
    CustomerRequest, CustomerResponse, MessageResponse, SupplierRequest, SupplierResponse,
};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::ErrorCodeSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dealership backend API",
        description = "CRUD over customers, suppliers, cars and car ownership."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::customers::create_customer,
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::customers::get_customer,
        crate::inbound::http::customers::update_customer,
        crate::inbound::http::customers::delete_customer,
        crate::inbound::http::customers::list_customer_cars,
        crate::inbound::http::suppliers::create_supplier,
        crate::inbound::http::suppliers::list_suppliers,
        crate::inbound::http::suppliers::get_supplier,
        crate::inbound::http::suppliers::update_supplier,
        crate::inbound::http::suppliers::delete_supplier,
        crate::inbound::http::cars::create_car,
        crate::inbound::http::cars::list_cars,
        crate::inbound::http::cars::get_car,
        crate::inbound::http::cars::update_car,
        crate::inbound::http::cars::delete_car,
        crate::inbound::http::cars::list_car_customers,
        crate::inbound::http::customer_cars::create_customer_car,
        crate::inbound::http::customer_cars::list_customer_car_links,
        crate::inbound::http::customer_cars::get_customer_car,
        crate::inbound::http::customer_cars::update_customer_car,
        crate::inbound::http::customer_cars::delete_customer_car,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorEnvelope,
        ErrorCodeSchema,
        MessageResponse,
        AuditFields,
        CustomerRequest,
        CustomerResponse,
        SupplierRequest,
        SupplierResponse,
        CarRequest,
        CarResponse,
        CustomerCarRequest,
        CustomerCarResponse,
    )),
    tags(
        (name = "customers", description = "Customer records and their cars"),
        (name = "suppliers", description = "Supplier records"),
        (name = "cars", description = "Car records and their owners"),
        (name = "customer-cars", description = "Customer car relationships"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
