//! Application error taxonomy.
//!
//! [`AppError`] is the one error value that travels from repositories and
//! usecases up to the HTTP boundary. It stays transport agnostic apart from
//! the numeric status, which is derived from its [`ErrorCode`] exactly once at
//! construction. Inbound adapters turn it into the `{code, message}` envelope.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable machine-readable error code describing the failure category.
///
/// Serialises as `SCREAMING_SNAKE_CASE`, e.g. `NOT_FOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The requested resource does not exist.
    NotFound,
    /// The request is malformed or fails validation.
    InvalidInput,
    /// An unexpected failure inside the service.
    InternalError,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// A resource with the same identity already exists.
    AlreadyExists,
    /// The operation did not complete in time.
    Timeout,
    /// A transaction request is inconsistent.
    InvalidTransaction,
    /// The account balance cannot cover the operation.
    InsufficientFunds,
    /// The resource is in a state that forbids the operation.
    InvalidStatus,
}

impl ErrorCode {
    /// Every code in the taxonomy.
    pub const ALL: [Self; 10] = [
        Self::NotFound,
        Self::InvalidInput,
        Self::InternalError,
        Self::Unauthorized,
        Self::Forbidden,
        Self::AlreadyExists,
        Self::Timeout,
        Self::InvalidTransaction,
        Self::InsufficientFunds,
        Self::InvalidStatus,
    ];

    /// HTTP status associated with this code.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::AlreadyExists => 409,
            Self::Timeout => 408,
            Self::InvalidInput
            | Self::InvalidTransaction
            | Self::InsufficientFunds
            | Self::InvalidStatus => 400,
            Self::InternalError => 500,
        }
    }

    /// Wire name of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidInput => "INVALID_INPUT",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::Timeout => "TIMEOUT",
            Self::InvalidTransaction => "INVALID_TRANSACTION",
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::InvalidStatus => "INVALID_STATUS",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared handle to the underlying failure wrapped by an [`AppError`].
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Generic message used for every internal failure surfaced to clients.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const UNAUTHORIZED_MESSAGE: &str = "Unauthorized access";
const FORBIDDEN_MESSAGE: &str = "Access forbidden";

/// Structured application error.
///
/// ## Invariants
/// - `http_status` always equals `code.http_status()`; there is no setter.
/// - `details` are diagnostics for logs and are never part of a client
///   payload.
///
/// # Examples
/// ```
/// use dealership::domain::{AppError, ErrorCode};
///
/// let err = AppError::not_found("Customer", "42");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.http_status(), 404);
/// assert_eq!(err.message(), "Customer with ID '42' not found");
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    code: ErrorCode,
    http_status: u16,
    message: String,
    cause: Option<Cause>,
    details: Option<Map<String, Value>>,
}

impl AppError {
    /// Create a plain error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            http_status: code.http_status(),
            message: message.into(),
            cause: None,
            details: None,
        }
    }

    /// Create an error wrapping an underlying cause.
    ///
    /// # Examples
    /// ```
    /// use std::error::Error as _;
    /// use dealership::domain::{AppError, ErrorCode};
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let err = AppError::wrap(io, ErrorCode::InternalError, "write failed");
    /// assert!(err.source().is_some());
    /// ```
    pub fn wrap<E>(cause: E, code: ErrorCode, message: impl Into<String>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(code, message).with_cause(Arc::new(cause))
    }

    fn with_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// HTTP status derived from the code.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The wrapped cause, if any.
    ///
    /// Callers match on a concrete cause with `downcast_ref`.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Diagnostic details attached to the error.
    #[must_use]
    pub const fn details(&self) -> Option<&Map<String, Value>> {
        self.details.as_ref()
    }

    /// Replace the diagnostic details.
    #[must_use]
    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details = Some(details);
        self
    }

    /// Add a single diagnostic entry.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Whether the status falls in the 5xx range.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.http_status >= 500
    }

    /// `"<resource> with ID '<id>' not found"`.
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{resource} with ID '{id}' not found"),
        )
    }

    /// Validation failure supplied by the caller.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Wrap an unexpected failure behind the generic internal message.
    pub fn internal<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::wrap(cause, ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
    }

    /// Authentication failure; a blank message falls back to the default.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Unauthorized,
            message_or_default(message.into(), UNAUTHORIZED_MESSAGE),
        )
    }

    /// Authorisation failure; a blank message falls back to the default.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::Forbidden,
            message_or_default(message.into(), FORBIDDEN_MESSAGE),
        )
    }

    /// `"<resource> with ID '<id>' already exists"`.
    pub fn already_exists(resource: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::AlreadyExists,
            format!("{resource} with ID '{id}' already exists"),
        )
    }
}

fn message_or_default(message: String, default: &str) -> String {
    if message.trim().is_empty() {
        default.to_owned()
    } else {
        message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "[{}] {}: {cause}", self.code, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Result alias used by usecases and handlers.
pub type ApiResult<T> = Result<T, AppError>;
