//! Car endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{CarRequest, CarResponse, CustomerCarResponse, MessageResponse};
use super::error::ErrorEnvelope;
use super::resources;
use super::state::HttpState;
use super::validation::path_id;

/// Create a car. `price` must be positive.
#[utoipa::path(
    post,
    path = "/cars",
    request_body = CarRequest,
    responses(
        (status = 201, description = "Car created", body = CarResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 409, description = "Identifier already in use", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["cars"]
)]
#[post("/cars")]
pub async fn create_car(
    state: web::Data<HttpState>,
    payload: web::Json<CarRequest>,
) -> ApiResult<HttpResponse> {
    resources::create::<_, CarResponse>(state.cars.as_ref(), payload.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/cars",
    responses(
        (status = 200, description = "Cars", body = [CarResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["cars"]
)]
#[get("/cars")]
pub async fn list_cars(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list::<_, CarResponse>(state.cars.as_ref()).await
}

#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(("id" = String, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car", body = CarResponse),
        (status = 404, description = "Unknown car", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["cars"]
)]
#[get("/cars/{id}")]
pub async fn get_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::get::<_, CarResponse>(state.cars.as_ref(), path.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/cars/{id}",
    params(("id" = String, Path, description = "Car identifier")),
    request_body = CarRequest,
    responses(
        (status = 200, description = "Car updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "Unknown car", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["cars"]
)]
#[put("/cars/{id}")]
pub async fn update_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CarRequest>,
) -> ApiResult<HttpResponse> {
    resources::update(state.cars.as_ref(), path.into_inner(), payload.into_inner()).await
}

#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(("id" = String, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car deleted", body = MessageResponse),
        (status = 404, description = "Unknown car", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["cars"]
)]
#[delete("/cars/{id}")]
pub async fn delete_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.cars.as_ref(), path.into_inner()).await
}

/// Customers owning a car, newest relationship first.
#[utoipa::path(
    get,
    path = "/cars/{id}/customers",
    params(("id" = String, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Ownership records", body = [CustomerCarResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["cars"]
)]
#[get("/cars/{id}/customers")]
pub async fn list_car_customers(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path_id(path.into_inner())?;
    let records = state.ownership.customers_of_car(&id).await?;
    let body: Vec<CustomerCarResponse> = records.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}
