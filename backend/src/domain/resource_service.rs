//! Generic CRUD usecase shared by every resource.
//!
//! The service is a thin pass-through: it defaults the identifier and audit
//! actors, stamps timestamps from the injected clock and translates
//! repository failures into [`AppError`] values.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

use super::ports::{RepositoryError, ResourceRepository, ResourceUseCase};
use super::resource::actor_or;
use super::{
    AppError, ApiResult, AuditTrail, Draft, Record, ResourceFields, ResourceId, Revision,
    SYSTEM_ACTOR,
};

/// Usecase implementation backed by a [`ResourceRepository`].
pub struct ResourceService<F: ResourceFields> {
    repository: Arc<dyn ResourceRepository<F>>,
    clock: Arc<dyn Clock>,
    _fields: PhantomData<fn() -> F>,
}

impl<F: ResourceFields> ResourceService<F> {
    /// Build the service from its repository and clock.
    pub fn new(repository: Arc<dyn ResourceRepository<F>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            _fields: PhantomData,
        }
    }

    // Postgres keeps microseconds; truncate so returned records match stored
    // ones.
    fn now(&self) -> DateTime<Utc> {
        self.clock.utc().trunc_subsecs(6)
    }
}

/// Translate a repository failure for the resource `F`.
///
/// `NotFound` and `Duplicate` only carry meaning for a specific id; without
/// one they are treated as internal failures like every other variant.
pub(crate) fn map_repository_error<F: ResourceFields>(
    error: RepositoryError,
    id: Option<&ResourceId>,
) -> AppError {
    match (error, id) {
        (RepositoryError::NotFound, Some(id)) => AppError::not_found(F::NAME, id),
        (RepositoryError::Duplicate, Some(id)) => AppError::already_exists(F::NAME, id),
        (other, _) => AppError::internal(other),
    }
}

#[async_trait]
impl<F: ResourceFields> ResourceUseCase<F> for ResourceService<F> {
    async fn create(&self, draft: Draft<F>) -> ApiResult<Record<F>> {
        let Draft {
            id,
            fields,
            created_by,
            updated_by,
        } = draft;
        let now = self.now();
        let created_by = actor_or(created_by, SYSTEM_ACTOR);
        let updated_by = actor_or(updated_by, &created_by);
        let record = Record {
            id: id.unwrap_or_else(ResourceId::random),
            fields,
            audit: AuditTrail {
                created_at: now,
                created_by,
                updated_at: now,
                updated_by,
            },
        };

        self.repository
            .create(&record)
            .await
            .map_err(|err| map_repository_error::<F>(err, Some(&record.id)))?;
        Ok(record)
    }

    async fn get(&self, id: &ResourceId) -> ApiResult<Record<F>> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error::<F>(err, Some(id)))
    }

    async fn list(&self) -> ApiResult<Vec<Record<F>>> {
        self.repository
            .list()
            .await
            .map_err(|err| map_repository_error::<F>(err, None))
    }

    async fn update(&self, id: &ResourceId, revision: Revision<F>) -> ApiResult<()> {
        let updated_by = actor_or(revision.updated_by, SYSTEM_ACTOR);
        self.repository
            .update(id, &revision.fields, self.now(), &updated_by)
            .await
            .map_err(|err| map_repository_error::<F>(err, Some(id)))
    }

    async fn delete(&self, id: &ResourceId) -> ApiResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| map_repository_error::<F>(err, Some(id)))
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
