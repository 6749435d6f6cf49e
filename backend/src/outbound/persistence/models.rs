//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Each table has a read row, an insertable
//! row borrowed from a domain [`Record`], and a changeset for updates. The
//! read rows expose `new_row`, `changeset` and `into_record`, which the
//! repository macro relies on.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::ports::RepositoryError;
use crate::domain::{AuditTrail, Car, Customer, CustomerCar, Record, ResourceId, Supplier};

use super::schema::{car, customer, customer_car, supplier};

fn stored_id(raw: String) -> Result<ResourceId, RepositoryError> {
    ResourceId::new(raw).map_err(|err| RepositoryError::query(format!("stored row: {err}")))
}

fn audit(
    created_at: DateTime<Utc>,
    created_by: String,
    updated_at: DateTime<Utc>,
    updated_by: String,
) -> AuditTrail {
    AuditTrail {
        created_at,
        created_by,
        updated_at,
        updated_by,
    }
}

// ---------------------------------------------------------------------------
// Customer models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customer)]
pub(crate) struct NewCustomerRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = customer)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CustomerChangeset<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub email: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

impl CustomerRow {
    pub(crate) fn new_row(record: &Record<Customer>) -> NewCustomerRow<'_> {
        NewCustomerRow {
            id: record.id.as_str(),
            name: &record.fields.name,
            address: &record.fields.address,
            phone: record.fields.phone.as_deref(),
            email: &record.fields.email,
            created_at: record.audit.created_at,
            created_by: &record.audit.created_by,
            updated_at: record.audit.updated_at,
            updated_by: &record.audit.updated_by,
        }
    }

    pub(crate) fn changeset<'a>(
        fields: &'a Customer,
        updated_at: DateTime<Utc>,
        updated_by: &'a str,
    ) -> CustomerChangeset<'a> {
        CustomerChangeset {
            name: &fields.name,
            address: &fields.address,
            phone: fields.phone.as_deref(),
            email: &fields.email,
            updated_at,
            updated_by,
        }
    }

    pub(crate) fn into_record(self) -> Result<Record<Customer>, RepositoryError> {
        Ok(Record {
            id: stored_id(self.id)?,
            fields: Customer {
                name: self.name,
                address: self.address,
                phone: self.phone,
                email: self.email,
            },
            audit: audit(
                self.created_at,
                self.created_by,
                self.updated_at,
                self.updated_by,
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// Supplier models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = supplier)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SupplierRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = supplier)]
pub(crate) struct NewSupplierRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = supplier)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct SupplierChangeset<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub phone: Option<&'a str>,
    pub email: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

impl SupplierRow {
    pub(crate) fn new_row(record: &Record<Supplier>) -> NewSupplierRow<'_> {
        NewSupplierRow {
            id: record.id.as_str(),
            name: &record.fields.name,
            address: &record.fields.address,
            phone: record.fields.phone.as_deref(),
            email: &record.fields.email,
            created_at: record.audit.created_at,
            created_by: &record.audit.created_by,
            updated_at: record.audit.updated_at,
            updated_by: &record.audit.updated_by,
        }
    }

    pub(crate) fn changeset<'a>(
        fields: &'a Supplier,
        updated_at: DateTime<Utc>,
        updated_by: &'a str,
    ) -> SupplierChangeset<'a> {
        SupplierChangeset {
            name: &fields.name,
            address: &fields.address,
            phone: fields.phone.as_deref(),
            email: &fields.email,
            updated_at,
            updated_by,
        }
    }

    pub(crate) fn into_record(self) -> Result<Record<Supplier>, RepositoryError> {
        Ok(Record {
            id: stored_id(self.id)?,
            fields: Supplier {
                name: self.name,
                address: self.address,
                phone: self.phone,
                email: self.email,
            },
            audit: audit(
                self.created_at,
                self.created_by,
                self.updated_at,
                self.updated_by,
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// Car models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = car)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CarRow {
    pub id: String,
    pub name: String,
    pub supp_id: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = car)]
pub(crate) struct NewCarRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub supp_id: &'a str,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = car)]
pub(crate) struct CarChangeset<'a> {
    pub name: &'a str,
    pub supp_id: &'a str,
    pub price: i64,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

impl CarRow {
    pub(crate) fn new_row(record: &Record<Car>) -> NewCarRow<'_> {
        NewCarRow {
            id: record.id.as_str(),
            name: &record.fields.name,
            supp_id: &record.fields.supplier_id,
            price: record.fields.price,
            created_at: record.audit.created_at,
            created_by: &record.audit.created_by,
            updated_at: record.audit.updated_at,
            updated_by: &record.audit.updated_by,
        }
    }

    pub(crate) fn changeset<'a>(
        fields: &'a Car,
        updated_at: DateTime<Utc>,
        updated_by: &'a str,
    ) -> CarChangeset<'a> {
        CarChangeset {
            name: &fields.name,
            supp_id: &fields.supplier_id,
            price: fields.price,
            updated_at,
            updated_by,
        }
    }

    pub(crate) fn into_record(self) -> Result<Record<Car>, RepositoryError> {
        Ok(Record {
            id: stored_id(self.id)?,
            fields: Car {
                name: self.name,
                supplier_id: self.supp_id,
                price: self.price,
            },
            audit: audit(
                self.created_at,
                self.created_by,
                self.updated_at,
                self.updated_by,
            ),
        })
    }
}

// ---------------------------------------------------------------------------
// Customer-car models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customer_car)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CustomerCarRow {
    pub id: String,
    pub car_id: String,
    pub cust_id: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = customer_car)]
pub(crate) struct NewCustomerCarRow<'a> {
    pub id: &'a str,
    pub car_id: &'a str,
    pub cust_id: &'a str,
    pub created_at: DateTime<Utc>,
    pub created_by: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = customer_car)]
pub(crate) struct CustomerCarChangeset<'a> {
    pub car_id: &'a str,
    pub cust_id: &'a str,
    pub updated_at: DateTime<Utc>,
    pub updated_by: &'a str,
}

impl CustomerCarRow {
    pub(crate) fn new_row(record: &Record<CustomerCar>) -> NewCustomerCarRow<'_> {
        NewCustomerCarRow {
            id: record.id.as_str(),
            car_id: &record.fields.car_id,
            cust_id: &record.fields.customer_id,
            created_at: record.audit.created_at,
            created_by: &record.audit.created_by,
            updated_at: record.audit.updated_at,
            updated_by: &record.audit.updated_by,
        }
    }

    pub(crate) fn changeset<'a>(
        fields: &'a CustomerCar,
        updated_at: DateTime<Utc>,
        updated_by: &'a str,
    ) -> CustomerCarChangeset<'a> {
        CustomerCarChangeset {
            car_id: &fields.car_id,
            cust_id: &fields.customer_id,
            updated_at,
            updated_by,
        }
    }

    pub(crate) fn into_record(self) -> Result<Record<CustomerCar>, RepositoryError> {
        Ok(Record {
            id: stored_id(self.id)?,
            fields: CustomerCar {
                car_id: self.car_id,
                customer_id: self.cust_id,
            },
            audit: audit(
                self.created_at,
                self.created_by,
                self.updated_at,
                self.updated_by,
            ),
        })
    }
}
