//! Customer-car lookups by foreign key.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{OwnershipQuery, OwnershipRepository};
use super::{AppError, ApiResult, CustomerCar, Record, ResourceId};

/// [`OwnershipQuery`] backed by an [`OwnershipRepository`].
pub struct OwnershipService {
    repository: Arc<dyn OwnershipRepository>,
}

impl OwnershipService {
    pub fn new(repository: Arc<dyn OwnershipRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OwnershipQuery for OwnershipService {
    async fn cars_of_customer(
        &self,
        customer_id: &ResourceId,
    ) -> ApiResult<Vec<Record<CustomerCar>>> {
        self.repository
            .list_by_customer(customer_id)
            .await
            .map_err(AppError::internal)
    }

    async fn customers_of_car(&self, car_id: &ResourceId) -> ApiResult<Vec<Record<CustomerCar>>> {
        self.repository
            .list_by_car(car_id)
            .await
            .map_err(AppError::internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockOwnershipRepository, RepositoryError};
    use crate::domain::{AuditTrail, ErrorCode};
    use chrono::Utc;
    use rstest::rstest;

    fn relationship(id: &str, car_id: &str, customer_id: &str) -> Record<CustomerCar> {
        let now = Utc::now();
        Record {
            id: ResourceId::new(id).expect("valid id"),
            fields: CustomerCar {
                car_id: car_id.to_owned(),
                customer_id: customer_id.to_owned(),
            },
            audit: AuditTrail {
                created_at: now,
                created_by: "system".to_owned(),
                updated_at: now,
                updated_by: "system".to_owned(),
            },
        }
    }

    #[rstest]
    #[tokio::test]
    async fn cars_of_customer_delegates_to_repository() {
        let mut repo = MockOwnershipRepository::new();
        repo.expect_list_by_customer()
            .withf(|id| id.as_str() == "cust-1")
            .times(1)
            .return_once(|_| Ok(vec![relationship("cc-1", "car-1", "cust-1")]));

        let service = OwnershipService::new(Arc::new(repo));
        let id = ResourceId::new("cust-1").expect("valid id");
        let found = service.cars_of_customer(&id).await.expect("lookup succeeds");

        assert_eq!(found.len(), 1);
        assert_eq!(found.first().map(|r| r.fields.car_id.as_str()), Some("car-1"));
    }

    #[rstest]
    #[tokio::test]
    async fn empty_lookups_are_not_errors() {
        let mut repo = MockOwnershipRepository::new();
        repo.expect_list_by_car().return_once(|_| Ok(Vec::new()));

        let service = OwnershipService::new(Arc::new(repo));
        let id = ResourceId::new("car-9").expect("valid id");

        assert!(service
            .customers_of_car(&id)
            .await
            .expect("lookup succeeds")
            .is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn repository_failures_are_internal() {
        let mut repo = MockOwnershipRepository::new();
        repo.expect_list_by_car()
            .return_once(|_| Err(RepositoryError::connection("refused")));

        let service = OwnershipService::new(Arc::new(repo));
        let id = ResourceId::new("car-9").expect("valid id");
        let err = service.customers_of_car(&id).await.expect_err("lookup fails");

        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
