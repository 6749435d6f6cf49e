//! Field-level validation shared by the resource entities.

use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// A required business field that is missing or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field is absent or blank.
    #[error("{field} is required")]
    Missing { field: &'static str },
    /// The field is not a syntactically valid email address.
    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },
    /// The field must be strictly positive.
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

impl FieldError {
    /// Wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::InvalidEmail { field } | Self::NotPositive { field } => {
                field
            }
        }
    }

    /// Short machine-readable reason.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::InvalidEmail { .. } => "invalid_email",
            Self::NotPositive { .. } => "not_positive",
        }
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Missing { field });
    }
    Ok(())
}

pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), FieldError> {
    require_text(field, value)?;
    let valid = EMAIL.as_ref().is_some_and(|re| re.is_match(value));
    if valid {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail { field })
    }
}

pub(crate) fn require_positive(field: &'static str, value: i64) -> Result<(), FieldError> {
    if value > 0 {
        Ok(())
    } else {
        Err(FieldError::NotPositive { field })
    }
}
