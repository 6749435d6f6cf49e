//! Shared helpers for Diesel repository implementations.
//!
//! - Error mapping from pool and Diesel errors to [`RepositoryError`]
//! - Zero-row detection for updates and deletes

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors.
///
/// `NotFound` becomes the repository sentinel so callers never see the raw
/// driver miss.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RepositoryError::NotFound,
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            RepositoryError::Duplicate
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => RepositoryError::query("database error"),
        _ => RepositoryError::query("database error"),
    }
}

/// Result of an update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AffectedRows {
    /// At least one row changed.
    Some,
    /// The filter matched nothing.
    None,
}

impl From<usize> for AffectedRows {
    fn from(count: usize) -> Self {
        if count == 0 { Self::None } else { Self::Some }
    }
}

/// Surface zero affected rows as [`RepositoryError::NotFound`].
pub(crate) fn ensure_affected(count: usize) -> Result<(), RepositoryError> {
    match AffectedRows::from(count) {
        AffectedRows::Some => Ok(()),
        AffectedRows::None => Err(RepositoryError::NotFound),
    }
}
