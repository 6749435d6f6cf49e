//! Diesel repositories for the sales tables.
//!
//! The CRUD statements come from [`impl_resource_repository!`]. The
//! relationship repository additionally answers ownership lookups.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OwnershipRepository, RepositoryError};
use crate::domain::{Car, Customer, CustomerCar, Record, ResourceId, Supplier};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{CarRow, CustomerCarRow, CustomerRow, SupplierRow};
use super::resource_repository_macros::impl_resource_repository;
use super::schema::{car, customer, customer_car, supplier};

impl_resource_repository! {
    /// Customers stored in the `customer` table.
    DieselCustomerRepository for Customer {
        table: customer,
        row: CustomerRow,
    }
}

impl_resource_repository! {
    /// Suppliers stored in the `supplier` table.
    DieselSupplierRepository for Supplier {
        table: supplier,
        row: SupplierRow,
    }
}

impl_resource_repository! {
    /// Cars stored in the `car` table.
    DieselCarRepository for Car {
        table: car,
        row: CarRow,
    }
}

impl_resource_repository! {
    /// Customer and car pairings stored in the `customer_car` table.
    DieselCustomerCarRepository for CustomerCar {
        table: customer_car,
        row: CustomerCarRow,
    }
}

#[async_trait]
impl OwnershipRepository for DieselCustomerCarRepository {
    async fn list_by_customer(
        &self,
        customer_id: &ResourceId,
    ) -> Result<Vec<Record<CustomerCar>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CustomerCarRow> = customer_car::table
            .filter(customer_car::cust_id.eq(customer_id.as_str()))
            .select(CustomerCarRow::as_select())
            .order_by(customer_car::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(CustomerCarRow::into_record).collect()
    }

    async fn list_by_car(
        &self,
        car_id: &ResourceId,
    ) -> Result<Vec<Record<CustomerCar>>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CustomerCarRow> = customer_car::table
            .filter(customer_car::car_id.eq(car_id.as_str()))
            .select(CustomerCarRow::as_select())
            .order_by(customer_car::created_at.desc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(CustomerCarRow::into_record).collect()
    }
}
