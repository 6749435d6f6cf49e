//! Shared shape of every stored resource.
//!
//! A resource is a set of business fields (`F`) plus an immutable identifier
//! and an audit trail. The generic service and repository ports operate on
//! [`Record<F>`] so each resource only describes its own fields through
//! [`ResourceFields`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::FieldError;

/// Audit actor recorded when the caller does not supply one.
pub const SYSTEM_ACTOR: &str = "system";

/// Business fields of a resource, plus the descriptor used by generic code.
pub trait ResourceFields: Clone + fmt::Debug + Send + Sync + 'static {
    /// Human-facing resource name used in messages, e.g. `"Customer"`.
    const NAME: &'static str;

    /// Check required fields before the record reaches a usecase.
    ///
    /// # Errors
    /// Returns the first [`FieldError`] encountered.
    fn validate(&self) -> Result<(), FieldError>;
}

/// Validation errors for [`ResourceId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResourceIdError {
    #[error("resource id must not be empty")]
    Empty,
}

/// Opaque resource identifier.
///
/// ## Invariants
/// - Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Validate and wrap an identifier.
    ///
    /// # Errors
    /// Returns [`ResourceIdError::Empty`] for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ResourceIdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ResourceIdError::Empty);
        }
        Ok(Self(raw))
    }

    /// Generate a fresh UUID v4 identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for ResourceId {
    type Error = ResourceIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceId> for String {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

/// Creation and last-modification stamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTrail {
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}

/// A stored resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<F> {
    pub id: ResourceId,
    pub fields: F,
    pub audit: AuditTrail,
}

/// Input for creating a resource. Optional values are defaulted by the
/// usecase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<F> {
    pub id: Option<ResourceId>,
    pub fields: F,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl<F> Draft<F> {
    /// Draft with no caller-supplied id or actors.
    pub const fn new(fields: F) -> Self {
        Self {
            id: None,
            fields,
            created_by: None,
            updated_by: None,
        }
    }
}

/// Input for replacing the business fields of an existing resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision<F> {
    pub fields: F,
    pub updated_by: Option<String>,
}

impl<F> Revision<F> {
    /// Revision with no caller-supplied actor.
    pub const fn new(fields: F) -> Self {
        Self {
            fields,
            updated_by: None,
        }
    }
}

/// Normalise an optional actor, treating blank values as absent.
pub(crate) fn actor_or(actor: Option<String>, fallback: &str) -> String {
    actor
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
