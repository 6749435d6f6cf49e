//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! Diesel with async support through `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain records.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Sentinel errors**: a missing row surfaces as
//!   [`RepositoryError::NotFound`](crate::domain::ports::RepositoryError),
//!   never as a raw driver error.
//!
//! # Example
//!
//! ```ignore
//! use dealership::outbound::persistence::{DbPool, DieselCustomerRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/sales")).await?;
//! let customers = DieselCustomerRepository::new(pool);
//! ```

pub(crate) mod diesel_helpers;
mod diesel_resource_repositories;
mod migrations;
mod models;
mod pool;
mod resource_repository_macros;
mod schema;

pub use diesel_resource_repositories::{
    DieselCarRepository, DieselCustomerCarRepository, DieselCustomerRepository,
    DieselSupplierRepository,
};
pub use migrations::run_migrations;
pub use pool::{DbPool, PoolConfig, PoolError};
