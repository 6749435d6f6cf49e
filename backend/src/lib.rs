//! Vehicle sales backend library.
//!
//! Layers follow a ports-and-adapters split: [`domain`] holds entities,
//! usecases and port traits; [`inbound`] adapts HTTP onto the usecases;
//! [`outbound`] implements the repository ports.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod logging;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::{ErrorHandler, RequestIdMiddleware};
