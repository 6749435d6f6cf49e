//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`ResourceRepository`], [`OwnershipRepository`]) are
//! implemented by persistence adapters. Driving ports ([`ResourceUseCase`],
//! [`OwnershipQuery`]) are what the HTTP adapter depends on.

mod macros;
pub(crate) use macros::define_port_error;

mod ownership_repository;
mod resource_repository;
mod resource_use_case;

#[cfg(test)]
pub use ownership_repository::MockOwnershipRepository;
pub use ownership_repository::OwnershipRepository;
pub use resource_repository::{RepositoryError, ResourceRepository};
#[cfg(test)]
pub use resource_use_case::MockOwnershipQuery;
pub use resource_use_case::{OwnershipQuery, ResourceUseCase};
