//! Domain primitives, usecases and ports.
//!
//! Purpose: define the resource entities, the application error taxonomy
//! and the generic CRUD usecase. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - [`AppError`] / [`ErrorCode`]: structured error and stable codes.
//! - [`Customer`], [`Supplier`], [`Car`], [`CustomerCar`]: business fields.
//! - [`Record`], [`Draft`], [`Revision`]: stored resource and its inputs.
//! - [`ResourceService`], [`OwnershipService`]: usecase implementations.

pub mod car;
pub mod customer;
pub mod customer_car;
pub mod error;
pub mod ownership_service;
pub mod ports;
pub mod request_id;
pub mod resource;
pub mod resource_service;
pub mod supplier;
pub mod validation;

pub use self::car::Car;
pub use self::customer::Customer;
pub use self::customer_car::CustomerCar;
pub use self::error::{ApiResult, AppError, Cause, ErrorCode, INTERNAL_ERROR_MESSAGE};
pub use self::ownership_service::OwnershipService;
pub use self::request_id::{REQUEST_ID_HEADER, RequestId};
pub use self::resource::{
    AuditTrail, Draft, Record, ResourceFields, ResourceId, ResourceIdError, Revision,
    SYSTEM_ACTOR,
};
pub use self::resource_service::ResourceService;
pub use self::supplier::Supplier;
pub use self::validation::FieldError;
