//! Declarative macro generating a Diesel-backed [`ResourceRepository`].
//!
//! Every resource table has the same five statements, so one macro emits the
//! adapter struct and the port implementation. The row type must provide
//! `new_row`, `changeset` and `into_record` (see `models.rs`).
//!
//! [`ResourceRepository`]: crate::domain::ports::ResourceRepository

/// Emit `$repo`, a repository over `$table` storing `$fields` via `$row`.
macro_rules! impl_resource_repository {
    (
        $(#[$meta:meta])*
        $repo:ident for $fields:ty {
            table: $table:ident,
            row: $row:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $repo {
            pool: $crate::outbound::persistence::DbPool,
        }

        impl $repo {
            /// Create a new repository with the given connection pool.
            pub fn new(pool: $crate::outbound::persistence::DbPool) -> Self {
                Self { pool }
            }
        }

        #[::async_trait::async_trait]
        impl $crate::domain::ports::ResourceRepository<$fields> for $repo {
            async fn create(
                &self,
                record: &$crate::domain::Record<$fields>,
            ) -> Result<(), $crate::domain::ports::RepositoryError> {
                use diesel_async::RunQueryDsl;
                use $crate::outbound::persistence::diesel_helpers::{
                    map_diesel_error, map_pool_error,
                };

                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                diesel::insert_into($table::table)
                    .values(<$row>::new_row(record))
                    .execute(&mut conn)
                    .await
                    .map(|_| ())
                    .map_err(map_diesel_error)
            }

            async fn find_by_id(
                &self,
                id: &$crate::domain::ResourceId,
            ) -> Result<$crate::domain::Record<$fields>, $crate::domain::ports::RepositoryError>
            {
                use diesel::prelude::*;
                use diesel_async::RunQueryDsl;
                use $crate::outbound::persistence::diesel_helpers::{
                    map_diesel_error, map_pool_error,
                };

                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let row: $row = $table::table
                    .find(id.as_str())
                    .select(<$row>::as_select())
                    .first(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                row.into_record()
            }

            async fn list(
                &self,
            ) -> Result<
                Vec<$crate::domain::Record<$fields>>,
                $crate::domain::ports::RepositoryError,
            > {
                use diesel::prelude::*;
                use diesel_async::RunQueryDsl;
                use $crate::outbound::persistence::diesel_helpers::{
                    map_diesel_error, map_pool_error,
                };

                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let rows: Vec<$row> = $table::table
                    .select(<$row>::as_select())
                    .order_by($table::created_at.desc())
                    .load(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                rows.into_iter().map(<$row>::into_record).collect()
            }

            async fn update(
                &self,
                id: &$crate::domain::ResourceId,
                fields: &$fields,
                updated_at: ::chrono::DateTime<::chrono::Utc>,
                updated_by: &str,
            ) -> Result<(), $crate::domain::ports::RepositoryError> {
                use diesel::prelude::*;
                use diesel_async::RunQueryDsl;
                use $crate::outbound::persistence::diesel_helpers::{
                    ensure_affected, map_diesel_error, map_pool_error,
                };

                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let changes = <$row>::changeset(fields, updated_at, updated_by);
                let updated = diesel::update($table::table.find(id.as_str()))
                    .set(&changes)
                    .execute(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                ensure_affected(updated)
            }

            async fn delete(
                &self,
                id: &$crate::domain::ResourceId,
            ) -> Result<(), $crate::domain::ports::RepositoryError> {
                use diesel::prelude::*;
                use diesel_async::RunQueryDsl;
                use $crate::outbound::persistence::diesel_helpers::{
                    ensure_affected, map_diesel_error, map_pool_error,
                };

                let mut conn = self.pool.get().await.map_err(map_pool_error)?;
                let deleted = diesel::delete($table::table.find(id.as_str()))
                    .execute(&mut conn)
                    .await
                    .map_err(map_diesel_error)?;
                ensure_affected(deleted)
            }
        }
    };
}

pub(crate) use impl_resource_repository;
