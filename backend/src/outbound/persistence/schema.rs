//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Customers buying cars.
    customer (id) {
        id -> Varchar,
        name -> Varchar,
        address -> Varchar,
        phone -> Nullable<Varchar>,
        email -> Varchar,
        created_at -> Timestamptz,
        created_by -> Varchar,
        updated_at -> Timestamptz,
        updated_by -> Varchar,
    }
}

diesel::table! {
    /// Suppliers providing cars.
    supplier (id) {
        id -> Varchar,
        name -> Varchar,
        address -> Varchar,
        phone -> Nullable<Varchar>,
        email -> Varchar,
        created_at -> Timestamptz,
        created_by -> Varchar,
        updated_at -> Timestamptz,
        updated_by -> Varchar,
    }
}

diesel::table! {
    /// Cars on offer. `supp_id` references a supplier without a constraint.
    car (id) {
        id -> Varchar,
        name -> Varchar,
        supp_id -> Varchar,
        /// Price in the smallest currency unit.
        price -> Int8,
        created_at -> Timestamptz,
        created_by -> Varchar,
        updated_at -> Timestamptz,
        updated_by -> Varchar,
    }
}

diesel::table! {
    /// Customer-car ownership. Both references are unconstrained.
    customer_car (id) {
        id -> Varchar,
        car_id -> Varchar,
        cust_id -> Varchar,
        created_at -> Timestamptz,
        created_by -> Varchar,
        updated_at -> Timestamptz,
        updated_by -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(customer, supplier, car, customer_car);
