//! Supplier endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};

use super::ApiResult;
use super::dto::{MessageResponse, SupplierRequest, SupplierResponse};
use super::error::ErrorEnvelope;
use super::resources;
use super::state::HttpState;

#[utoipa::path(
    post,
    path = "/suppliers",
    request_body = SupplierRequest,
    responses(
        (status = 201, description = "Supplier created", body = SupplierResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 409, description = "Identifier already in use", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["suppliers"]
)]
#[post("/suppliers")]
pub async fn create_supplier(
    state: web::Data<HttpState>,
    payload: web::Json<SupplierRequest>,
) -> ApiResult<HttpResponse> {
    resources::create::<_, SupplierResponse>(state.suppliers.as_ref(), payload.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/suppliers",
    responses(
        (status = 200, description = "Suppliers", body = [SupplierResponse]),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["suppliers"]
)]
#[get("/suppliers")]
pub async fn list_suppliers(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    resources::list::<_, SupplierResponse>(state.suppliers.as_ref()).await
}

#[utoipa::path(
    get,
    path = "/suppliers/{id}",
    params(("id" = String, Path, description = "Supplier identifier")),
    responses(
        (status = 200, description = "Supplier", body = SupplierResponse),
        (status = 404, description = "Unknown supplier", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["suppliers"]
)]
#[get("/suppliers/{id}")]
pub async fn get_supplier(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::get::<_, SupplierResponse>(state.suppliers.as_ref(), path.into_inner()).await
}

#[utoipa::path(
    put,
    path = "/suppliers/{id}",
    params(("id" = String, Path, description = "Supplier identifier")),
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorEnvelope),
        (status = 404, description = "Unknown supplier", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["suppliers"]
)]
#[put("/suppliers/{id}")]
pub async fn update_supplier(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<SupplierRequest>,
) -> ApiResult<HttpResponse> {
    resources::update(
        state.suppliers.as_ref(),
        path.into_inner(),
        payload.into_inner(),
    )
    .await
}

#[utoipa::path(
    delete,
    path = "/suppliers/{id}",
    params(("id" = String, Path, description = "Supplier identifier")),
    responses(
        (status = 200, description = "Supplier deleted", body = MessageResponse),
        (status = 404, description = "Unknown supplier", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["suppliers"]
)]
#[delete("/suppliers/{id}")]
pub async fn delete_supplier(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(state.suppliers.as_ref(), path.into_inner()).await
}
