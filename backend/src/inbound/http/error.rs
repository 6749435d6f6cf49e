//! HTTP adapter mapping for [`AppError`].
//!
//! Purpose: keep the domain error type transport agnostic while letting Actix
//! handlers turn failures into the `{code, message}` envelope. Rendering an
//! error also attaches an [`ErrorRecord`] to the response so the error
//! middleware can log what happened without re-inspecting the body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::{AppError, ErrorCode, INTERNAL_ERROR_MESSAGE};

use super::schemas::ErrorCodeSchema;

/// Message used for unmatched routes.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Resource not found";

/// JSON error payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Stable machine-readable error code.
    #[schema(value_type = ErrorCodeSchema, example = "NOT_FOUND")]
    pub code: ErrorCode,
    /// Human-readable message.
    #[schema(example = "Customer with ID '42' not found")]
    pub message: String,
}

impl ErrorEnvelope {
    /// Envelope for any internal failure.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: INTERNAL_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Envelope for requests that matched no route.
    #[must_use]
    pub fn route_not_found() -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: ROUTE_NOT_FOUND_MESSAGE.to_owned(),
        }
    }
}

impl From<&AppError> for ErrorEnvelope {
    fn from(error: &AppError) -> Self {
        if error.is_server_error() {
            return Self {
                code: error.code(),
                message: INTERNAL_ERROR_MESSAGE.to_owned(),
            };
        }
        Self {
            code: error.code(),
            message: error.message().to_owned(),
        }
    }
}

/// What the error middleware logs about an [`AppError`] response.
///
/// Stored in the response extensions by [`AppError::error_response`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    /// Code of the rendered error.
    pub code: ErrorCode,
    /// Full message, including for 5xx errors.
    pub message: String,
    /// Diagnostic details.
    pub details: Option<Map<String, Value>>,
    /// Rendered cause chain head.
    pub cause: Option<String>,
}

impl From<&AppError> for ErrorRecord {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            details: error.details().cloned(),
            cause: error.cause().map(ToString::to_string),
        }
    }
}

/// Build an envelope response with the given status.
pub(crate) fn envelope_response(status: StatusCode, envelope: &ErrorEnvelope) -> HttpResponse {
    HttpResponse::build(status).json(envelope)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = envelope_response(self.status_code(), &ErrorEnvelope::from(self));
        response.extensions_mut().insert(ErrorRecord::from(self));
        response
    }
}

#[cfg(test)]
mod tests;
