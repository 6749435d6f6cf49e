//! Request middleware.
//!
//! Wrap order matters: [`RequestIdMiddleware`] must be outermost so that
//! [`ErrorHandler`] can log the request id.
//!
//! ```
//! use actix_web::App;
//! use dealership::middleware::{ErrorHandler, RequestIdMiddleware};
//!
//! let app = App::new()
//!     .wrap(ErrorHandler::new())
//!     .wrap(RequestIdMiddleware);
//! ```

pub mod error_handler;
pub mod request_id;

pub use error_handler::ErrorHandler;
pub use request_id::RequestIdMiddleware;
