//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub enum ErrorCodeSchema {
    /// The requested resource does not exist.
    #[schema(rename = "NOT_FOUND")]
    NotFound,
    /// The request is malformed or fails validation.
    #[schema(rename = "INVALID_INPUT")]
    InvalidInput,
    /// An unexpected error occurred on the server.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
    /// Authentication failed or is missing.
    #[schema(rename = "UNAUTHORIZED")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "FORBIDDEN")]
    Forbidden,
    /// A resource with the same identity already exists.
    #[schema(rename = "ALREADY_EXISTS")]
    AlreadyExists,
    /// The operation did not complete in time.
    #[schema(rename = "TIMEOUT")]
    Timeout,
    /// A transaction request is inconsistent.
    #[schema(rename = "INVALID_TRANSACTION")]
    InvalidTransaction,
    /// The balance cannot cover the operation.
    #[schema(rename = "INSUFFICIENT_FUNDS")]
    InsufficientFunds,
    /// The resource is in a state that forbids the operation.
    #[schema(rename = "INVALID_STATUS")]
    InvalidStatus,
}
