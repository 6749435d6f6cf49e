//! Resource-agnostic handler bodies.
//!
//! The annotated endpoint functions in the per-resource modules extract the
//! request and delegate here. Validation runs before the usecase is called.

use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::ports::ResourceUseCase;
use crate::domain::{Draft, Record, ResourceFields, Revision};

use super::ApiResult;
use super::dto::{MessageResponse, ResourceRequest};
use super::validation::{field_error, optional_id, path_id};

/// `POST /{collection}`: validate, create, answer 201 with the record.
pub(crate) async fn create<B, R>(
    usecase: &dyn ResourceUseCase<B::Fields>,
    body: B,
) -> ApiResult<HttpResponse>
where
    B: ResourceRequest,
    R: From<Record<B::Fields>> + Serialize,
{
    let parts = body.into_parts();
    parts.fields.validate().map_err(field_error)?;
    let draft = Draft {
        id: optional_id(parts.id)?,
        fields: parts.fields,
        created_by: parts.created_by,
        updated_by: parts.updated_by,
    };
    let record = usecase.create(draft).await?;
    Ok(HttpResponse::Created().json(R::from(record)))
}

/// `GET /{collection}/{id}`.
pub(crate) async fn get<F, R>(usecase: &dyn ResourceUseCase<F>, id: String) -> ApiResult<HttpResponse>
where
    F: ResourceFields,
    R: From<Record<F>> + Serialize,
{
    let id = path_id(id)?;
    let record = usecase.get(&id).await?;
    Ok(HttpResponse::Ok().json(R::from(record)))
}

/// `GET /{collection}`, newest first.
pub(crate) async fn list<F, R>(usecase: &dyn ResourceUseCase<F>) -> ApiResult<HttpResponse>
where
    F: ResourceFields,
    R: From<Record<F>> + Serialize,
{
    let records = usecase.list().await?;
    let body: Vec<R> = records.into_iter().map(R::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// `PUT /{collection}/{id}`. A body `id` is ignored.
pub(crate) async fn update<B>(
    usecase: &dyn ResourceUseCase<B::Fields>,
    id: String,
    body: B,
) -> ApiResult<HttpResponse>
where
    B: ResourceRequest,
{
    let id = path_id(id)?;
    let parts = body.into_parts();
    parts.fields.validate().map_err(field_error)?;
    let revision = Revision {
        fields: parts.fields,
        updated_by: parts.updated_by,
    };
    usecase.update(&id, revision).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated::<B::Fields>()))
}

/// `DELETE /{collection}/{id}`.
pub(crate) async fn delete<F>(usecase: &dyn ResourceUseCase<F>, id: String) -> ApiResult<HttpResponse>
where
    F: ResourceFields,
{
    let id = path_id(id)?;
    usecase.delete(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted::<F>()))
}
