//! Customer car relationship endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{CustomerCarRequest, CustomerCarResponse, MessageResponse};
use super::error::ErrorEnvelope;
use super::resources;
use super::state::HttpState;

/// Record that a customer owns a car.
///
/// Neither side is checked for existence.
#[utoipa::path(
    post,
    path = "/customer-cars",
    request_body = CustomerCarRequest,
    responses(
        (status = 201, description = "Relationship created", body = CustomerCarResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 409, description = "Identifier already in use", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customer-cars"]
)]
#[post("/customer-cars")]
pub async fn create_customer_car(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerCarRequest>,
) -> ApiResult<HttpResponse> {
    resources::create::<_, CustomerCarResponse>(
        state.customer_cars.as_ref(),
        payload.into_inner(),
    )
    .await
}

#[utoipa::path(
    get,
    path = "/customer-cars",
    responses(
        (status = 200, description = "Relationships", body = [CustomerCarResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customer-cars"]
)]
#[get("/customer-cars")]
pub async fn list_customer_car_links(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list::<_, CustomerCarResponse>(state.customer_cars.as_ref()).await
}

#[utoipa::path(
    get,
    path = "/customer-cars/{id}",
    params(("id" = String, Path, description = "Relationship identifier")),
    responses(
        (status = 200, description = "Relationship", body = CustomerCarResponse),
        (status = 404, description = "Unknown relationship", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customer-cars"]
)]
#[get("/customer-cars/{id}")]
pub async fn get_customer_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::get::<_, CustomerCarResponse>(state.customer_cars.as_ref(), path.into_inner())
        .await
}

#[utoipa::path(
    put,
    path = "/customer-cars/{id}",
    params(("id" = String, Path, description = "Relationship identifier")),
    request_body = CustomerCarRequest,
    responses(
        (status = 200, description = "Relationship updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "Unknown relationship", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customer-cars"]
)]
#[put("/customer-cars/{id}")]
pub async fn update_customer_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CustomerCarRequest>,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.customer_cars.as_ref(),
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/customer-cars/{id}",
    params(("id" = String, Path, description = "Relationship identifier")),
    responses(
        (status = 200, description = "Relationship deleted", body = MessageResponse),
        (status = 404, description = "Unknown relationship", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customer-cars"]
)]
#[delete("/customer-cars/{id}")]
pub async fn delete_customer_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.customer_cars.as_ref(), path.into_inner()).await
}
