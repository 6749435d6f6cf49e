//! Driving ports consumed by the HTTP adapter.

use async_trait::async_trait;

use crate::domain::{ApiResult, CustomerCar, Draft, Record, ResourceFields, ResourceId, Revision};

/// CRUD usecase for one resource.
#[async_trait]
pub trait ResourceUseCase<F: ResourceFields>: Send + Sync {
    /// Default the id and actors, then persist.
    async fn create(&self, draft: Draft<F>) -> ApiResult<Record<F>>;

    async fn get(&self, id: &ResourceId) -> ApiResult<Record<F>>;

    async fn list(&self) -> ApiResult<Vec<Record<F>>>;

    /// Replace business fields; `updated_by` defaults to the system actor.
    async fn update(&self, id: &ResourceId, revision: Revision<F>) -> ApiResult<()>;

    async fn delete(&self, id: &ResourceId) -> ApiResult<()>;
}

/// Read model over customer-car relationships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnershipQuery: Send + Sync {
    /// Cars owned by a customer.
    async fn cars_of_customer(
        &self,
        customer_id: &ResourceId,
    ) -> ApiResult<Vec<Record<CustomerCar>>>;

    /// Customers owning a car.
    async fn customers_of_car(&self, car_id: &ResourceId) -> ApiResult<Vec<Record<CustomerCar>>>;
}
