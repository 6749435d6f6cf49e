//! Port for single-table resource persistence.
//!
//! One generic contract serves every resource. Adapters translate "no rows"
//! and "zero rows affected" into [`RepositoryError::NotFound`] so callers
//! never see a driver-specific miss.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Record, ResourceFields, ResourceId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by resource repository adapters.
    pub enum RepositoryError {
        /// No row matched the identifier.
        NotFound => "record not found",
        /// A row with the same identifier already exists.
        Duplicate => "record already exists",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "repository query failed: {message}",
    }
}

/// Storage for one resource table.
#[async_trait]
pub trait ResourceRepository<F: ResourceFields>: Send + Sync {
    /// Insert a fully stamped record.
    ///
    /// Returns [`RepositoryError::Duplicate`] when the id is taken.
    async fn create(&self, record: &Record<F>) -> Result<(), RepositoryError>;

    /// Fetch a record by id, or [`RepositoryError::NotFound`].
    async fn find_by_id(&self, id: &ResourceId) -> Result<Record<F>, RepositoryError>;

    /// Every record, newest first.
    async fn list(&self) -> Result<Vec<Record<F>>, RepositoryError>;

    /// Replace business fields and the update stamp.
    ///
    /// Zero affected rows yield [`RepositoryError::NotFound`].
    async fn update(
        &self,
        id: &ResourceId,
        fields: &F,
        updated_at: DateTime<Utc>,
        updated_by: &str,
    ) -> Result<(), RepositoryError>;

    /// Remove a record. Zero affected rows yield [`RepositoryError::NotFound`].
    async fn delete(&self, id: &ResourceId) -> Result<(), RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_is_a_unit_sentinel() {
        assert_eq!(RepositoryError::not_found(), RepositoryError::NotFound);
        assert_eq!(RepositoryError::NotFound.to_string(), "record not found");
    }

    #[rstest]
    fn message_variants_render_context() {
        let err = RepositoryError::connection("pool timed out");
        assert_eq!(
            err.to_string(),
            "repository connection failed: pool timed out"
        );
    }
}
