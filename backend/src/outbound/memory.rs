//! In-process repository backing the HTTP tests and doctests.
//!
//! Semantics mirror the Diesel adapters: misses and zero-row mutations return
//! [`RepositoryError::NotFound`], taken ids return
//! [`RepositoryError::Duplicate`], and listings are newest first.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{OwnershipRepository, RepositoryError, ResourceRepository};
use crate::domain::{CustomerCar, Record, ResourceFields, ResourceId};

/// Vector-backed store for one resource.
#[derive(Debug)]
pub struct InMemoryRepository<F> {
    records: Mutex<Vec<Record<F>>>,
}

impl<F> Default for InMemoryRepository<F> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl<F: ResourceFields> InMemoryRepository<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Record<F>>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::query("in-memory store lock poisoned"))
    }

    fn newest_first(
        &self,
        keep: impl Fn(&Record<F>) -> bool,
    ) -> Result<Vec<Record<F>>, RepositoryError> {
        let mut found: Vec<Record<F>> = self
            .lock()?
            .iter()
            .filter(|record| keep(*record))
            .cloned()
            .collect();
        // Ties keep the later insertion first.
        found.reverse();
        found.sort_by(|a, b| b.audit.created_at.cmp(&a.audit.created_at));
        Ok(found)
    }
}

#[async_trait]
impl<F: ResourceFields> ResourceRepository<F> for InMemoryRepository<F> {
    async fn create(&self, record: &Record<F>) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Duplicate);
        }
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ResourceId) -> Result<Record<F>, RepositoryError> {
        self.lock()?
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Record<F>>, RepositoryError> {
        self.newest_first(|_| true)
    }

    async fn update(
        &self,
        id: &ResourceId,
        fields: &F,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        let record = records
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;
        record.fields = fields.clone();
        record.audit.updated_at = updated_at;
        updated_by.clone_into(&mut record.audit.updated_by);
        Ok(())
    }

    async fn delete(&self, id: &ResourceId) -> Result<(), RepositoryError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|record| &record.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl OwnershipRepository for InMemoryRepository<CustomerCar> {
    async fn list_by_customer(
        &self,
        customer_id: &ResourceId,
    ) -> Result<Vec<Record<CustomerCar>>, RepositoryError> {
        self.newest_first(|record| record.fields.customer_id == customer_id.as_str())
    }

    async fn list_by_car(
        &self,
        car_id: &ResourceId,
    ) -> Result<Vec<Record<CustomerCar>>, RepositoryError> {
        self.newest_first(|record| record.fields.car_id == car_id.as_str())
    }
}
