//! Request-scoped correlation identifier.
//!
//! `RequestId` follows a request through logs and responses. The inbound
//! value from `X-Request-ID` is reused when it is usable, otherwise a UUID v4
//! is generated. Task-local storage makes the active id available without
//! threading it through every call.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`RequestId::scope`] when spawning work that should keep the id.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::task_local;
use uuid::Uuid;

/// Header carrying the correlation identifier in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_INBOUND_LEN: usize = 128;

task_local! {
    static REQUEST_ID: RequestId;
}

/// Per-request correlation identifier.
///
/// # Examples
/// ```
/// use dealership::domain::RequestId;
///
/// let reused = RequestId::from_header(Some("abc-123"));
/// assert_eq!(reused.as_str(), "abc-123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(Arc<str>);

impl RequestId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Arc::from(Uuid::new_v4().to_string()))
    }

    /// Reuse an inbound header value, or generate when it is absent, blank,
    /// overlong or contains non-printable characters.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|raw| is_usable(raw))
            .map_or_else(Self::generate, |raw| Self(Arc::from(raw)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier in scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        REQUEST_ID.try_with(Clone::clone).ok()
    }

    /// Run `fut` with `request_id` in scope.
    pub async fn scope<Fut>(request_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_ID.scope(request_id, fut).await
    }
}

fn is_usable(raw: &str) -> bool {
    !raw.is_empty()
        && raw.len() <= MAX_INBOUND_LEN
        && raw.bytes().all(|byte| byte.is_ascii_graphic())
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn generated_ids_are_uuids() {
        let id = RequestId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("has space"))]
    #[case(Some("tab\there"))]
    fn unusable_headers_are_replaced(#[case] header: Option<&str>) {
        let id = RequestId::from_header(header);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[rstest]
    fn overlong_headers_are_replaced() {
        let long = "a".repeat(MAX_INBOUND_LEN + 1);
        let id = RequestId::from_header(Some(&long));
        assert_ne!(id.as_str(), long);
    }

    #[rstest]
    fn usable_headers_are_reused() {
        let id = RequestId::from_header(Some(" req-42 "));
        assert_eq!(id.as_str(), "req-42");
    }

    #[tokio::test]
    async fn current_reflects_scope() {
        let expected = RequestId::generate();
        let observed = RequestId::scope(expected.clone(), async { RequestId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(RequestId::current().is_none());
    }
}
