//! Port for looking up customer-car relationships by either side.

use async_trait::async_trait;

use crate::domain::{CustomerCar, Record, ResourceId};

use super::RepositoryError;

/// Foreign-key lookups over the customer-car table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipRepository: Send + Sync {
    /// Relationships for one customer, newest first.
    async fn list_by_customer(
        &self,
        customer_id: &ResourceId,
    ) -> Result<Vec<Record<CustomerCar>>, RepositoryError>;

    /// Relationships for one car, newest first.
    async fn list_by_car(
        &self,
        car_id: &ResourceId,
    ) -> Result<Vec<Record<CustomerCar>>, RepositoryError>;
}
