//! Request and response payloads for the resource endpoints.
//!
//! Request bodies default every field so that a missing field reaches
//! validation and is reported by name, rather than failing inside the JSON
//! extractor. Responses flatten the record's audit trail next to its fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AuditTrail, Car, Customer, CustomerCar, Record, ResourceFields, Supplier};

/// Body fields common to every write request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts<F> {
    pub id: Option<String>,
    pub fields: F,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

/// A write request body that decomposes into resource fields.
pub trait ResourceRequest {
    type Fields: ResourceFields;

    fn into_parts(self) -> RequestParts<Self::Fields>;
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Customer updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn updated<F: ResourceFields>() -> Self {
        Self {
            message: format!("{} updated successfully", F::NAME),
        }
    }

    pub(crate) fn deleted<F: ResourceFields>() -> Self {
        Self {
            message: format!("{} deleted successfully", F::NAME),
        }
    }
}

/// Audit columns echoed on every resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditFields {
    pub created_at: DateTime<Utc>,
    #[schema(example = "system")]
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    #[schema(example = "system")]
    pub updated_by: String,
}

impl From<AuditTrail> for AuditFields {
    fn from(audit: AuditTrail) -> Self {
        Self {
            created_at: audit.created_at,
            created_by: audit.created_by,
            updated_at: audit.updated_at,
            updated_by: audit.updated_by,
        }
    }
}

/// Customer create or update body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CustomerRequest {
    /// Identifier to use on create; generated when absent.
    pub id: Option<String>,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "1 Main Street")]
    pub address: String,
    #[schema(example = "+44 20 7946 0000")]
    pub phone: Option<String>,
    #[schema(example = "john@example.com")]
    pub email: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl ResourceRequest for CustomerRequest {
    type Fields = Customer;

    fn into_parts(self) -> RequestParts<Customer> {
        RequestParts {
            id: self.id,
            fields: Customer {
                name: self.name,
                address: self.address,
                phone: self.phone,
                email: self.email,
            },
            created_by: self.created_by,
            updated_by: self.updated_by,
        }
    }
}

/// Stored customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl From<Record<Customer>> for CustomerResponse {
    fn from(record: Record<Customer>) -> Self {
        let Customer {
            name,
            address,
            phone,
            email,
        } = record.fields;
        Self {
            id: record.id.into(),
            name,
            address,
            phone,
            email,
            audit: record.audit.into(),
        }
    }
}

/// Supplier create or update body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SupplierRequest {
    /// Identifier to use on create; generated when absent.
    pub id: Option<String>,
    #[schema(example = "Acme Motors")]
    pub name: String,
    #[schema(example = "5 Depot Road")]
    pub address: String,
    pub phone: Option<String>,
    #[schema(example = "sales@acme.example")]
    pub email: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl ResourceRequest for SupplierRequest {
    type Fields = Supplier;

    fn into_parts(self) -> RequestParts<Supplier> {
        RequestParts {
            id: self.id,
            fields: Supplier {
                name: self.name,
                address: self.address,
                phone: self.phone,
                email: self.email,
            },
            created_by: self.created_by,
            updated_by: self.updated_by,
        }
    }
}

/// Stored supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SupplierResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl From<Record<Supplier>> for SupplierResponse {
    fn from(record: Record<Supplier>) -> Self {
        let Supplier {
            name,
            address,
            phone,
            email,
        } = record.fields;
        Self {
            id: record.id.into(),
            name,
            address,
            phone,
            email,
            audit: record.audit.into(),
        }
    }
}

/// Car create or update body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CarRequest {
    /// Identifier to use on create; generated when absent.
    pub id: Option<String>,
    #[schema(example = "Roadster")]
    pub name: String,
    #[schema(example = "supp-1")]
    pub supplier_id: String,
    /// Price in the smallest currency unit; must be positive.
    #[schema(example = 2_500_000)]
    pub price: i64,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl ResourceRequest for CarRequest {
    type Fields = Car;

    fn into_parts(self) -> RequestParts<Car> {
        RequestParts {
            id: self.id,
            fields: Car {
                name: self.name,
                supplier_id: self.supplier_id,
                price: self.price,
            },
            created_by: self.created_by,
            updated_by: self.updated_by,
        }
    }
}

/// Stored car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarResponse {
    pub id: String,
    pub name: String,
    pub supplier_id: String,
    pub price: i64,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl From<Record<Car>> for CarResponse {
    fn from(record: Record<Car>) -> Self {
        let Car {
            name,
            supplier_id,
            price,
        } = record.fields;
        Self {
            id: record.id.into(),
            name,
            supplier_id,
            price,
            audit: record.audit.into(),
        }
    }
}

/// Customer car relationship create or update body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CustomerCarRequest {
    /// Identifier to use on create; generated when absent.
    pub id: Option<String>,
    #[schema(example = "car-1")]
    pub car_id: String,
    #[schema(example = "cust-1")]
    pub customer_id: String,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl ResourceRequest for CustomerCarRequest {
    type Fields = CustomerCar;

    fn into_parts(self) -> RequestParts<CustomerCar> {
        RequestParts {
            id: self.id,
            fields: CustomerCar {
                car_id: self.car_id,
                customer_id: self.customer_id,
            },
            created_by: self.created_by,
            updated_by: self.updated_by,
        }
    }
}

/// Stored customer car relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerCarResponse {
    pub id: String,
    pub car_id: String,
    pub customer_id: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl From<Record<CustomerCar>> for CustomerCarResponse {
    fn from(record: Record<CustomerCar>) -> Self {
        Self {
            id: record.id.into(),
            car_id: record.fields.car_id,
            customer_id: record.fields.customer_id,
            audit: record.audit.into(),
        }
    }
}
