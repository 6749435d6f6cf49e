//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local repositories for tests
//!
//! Adapters translate between domain records and storage representations.
//! They contain no business logic.

pub mod memory;
pub mod persistence;
