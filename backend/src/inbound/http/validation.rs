//! Request validation helpers shared by the resource handlers.
//!
//! Every rejection here becomes an `INVALID_INPUT` [`AppError`], including
//! extractor failures for malformed JSON and path segments.

use actix_web::{HttpRequest, error::JsonPayloadError, error::PathError, web};

use crate::domain::{AppError, FieldError, ResourceId};

use super::ApiResult;

/// Turn a field validation failure into an `INVALID_INPUT` error.
pub(crate) fn field_error(err: FieldError) -> AppError {
    AppError::invalid_input(err.to_string())
        .with_detail("field", err.field())
        .with_detail("reason", err.reason())
}

/// Parse a path identifier.
pub(crate) fn path_id(raw: String) -> ApiResult<ResourceId> {
    ResourceId::new(raw).map_err(|err| AppError::invalid_input(err.to_string()))
}

/// Parse an optional caller-supplied identifier; blank means "generate one".
pub(crate) fn optional_id(raw: Option<String>) -> ApiResult<Option<ResourceId>> {
    raw.filter(|value| !value.trim().is_empty())
        .map(path_id)
        .transpose()
}

fn json_error_message(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_owned(),
        JsonPayloadError::Deserialize(inner) => format!("Invalid request body: {inner}"),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_owned()
        }
        _ => "Invalid request body".to_owned(),
    }
}

fn reject_json(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = json_error_message(&err);
    AppError::invalid_input(message)
        .with_detail("reason", "malformed_body")
        .with_detail("error", err.to_string())
        .into()
}

fn reject_path(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::invalid_input("Invalid path parameter")
        .with_detail("reason", "malformed_path")
        .with_detail("error", err.to_string())
        .into()
}

/// JSON extractor configuration mapping payload errors to `INVALID_INPUT`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_json)
}

/// Path extractor configuration mapping segment errors to `INVALID_INPUT`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(reject_path)
}
