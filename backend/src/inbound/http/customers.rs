//! Customer endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{CustomerCarResponse, CustomerRequest, CustomerResponse, MessageResponse};
use super::error::ErrorEnvelope;
use super::resources;
use super::state::HttpState;
use super::validation::path_id;

/// Create a customer.
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 409, description = "Identifier already in use", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customers"]
)]
#[post("/customers")]
pub async fn create_customer(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    resources::create::<_, CustomerResponse>(state.customers.as_ref(), payload.into_inner()).await
}

/// List customers, newest first.
#[utoipa::path(
    get,
    path = "/customers",
    responses(
        (status = 200, description = "Customers", body = [CustomerResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customers"]
)]
#[get("/customers")]
pub async fn list_customers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list::<_, CustomerResponse>(state.customers.as_ref()).await
}

/// Fetch one customer.
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer", body = CustomerResponse),
        (status = 404, description = "Unknown customer", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customers"]
)]
#[get("/customers/{id}")]
pub async fn get_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::get::<_, CustomerResponse>(state.customers.as_ref(), path.into_inner()).await
}

/// Replace a customer's fields.
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(("id" = String, Path, description = "Customer identifier")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "Unknown customer", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customers"]
)]
#[put("/customers/{id}")]
pub async fn update_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CustomerRequest>,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.customers.as_ref(),
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

/// Delete a customer.
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 404, description = "Unknown customer", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customers"]
)]
#[delete("/customers/{id}")]
pub async fn delete_customer(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.customers.as_ref(), path.into_inner()).await
}

/// Cars owned by a customer, newest relationship first.
///
/// An unknown customer yields an empty list.
#[utoipa::path(
    get,
    path = "/customers/{id}/cars",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Ownership records", body = [CustomerCarResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["customers"]
)]
#[get("/customers/{id}/cars")]
pub async fn list_customer_cars(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path_id(path.into_inner())?;
    let records = state.ownership.cars_of_customer(&id).await?;
    let body: Vec<CustomerCarResponse> = records.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}
