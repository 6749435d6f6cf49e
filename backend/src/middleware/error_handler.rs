//! Centralized error handling and request logging.
//!
//! [`ErrorHandler`] wraps the whole application. For every request it:
//!
//! - leaves [`AppError`] responses as rendered, since
//!   [`AppError::error_response`] already wrote the envelope and attached an
//!   [`ErrorRecord`];
//! - replaces any other error with a generic 500 envelope, logging the
//!   original text instead of echoing it;
//! - renders errors raised by inner middleware itself, because the request
//!   must not be held while the router runs;
//! - gives unmatched routes (404 with no body) the `NOT_FOUND` envelope;
//! - emits exactly one structured log line, at `error` for 5xx, `warn` for
//!   4xx and `info` otherwise.
//!
//! Log output goes to an injected [`Dispatch`] when one is configured, so
//! tests can observe it without a global subscriber.

use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use actix_web::body::{BodySize, EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::InternalError;
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Dispatch, Level};

use crate::domain::{AppError, REQUEST_ID_HEADER, RequestId};
use crate::inbound::http::error::{ErrorEnvelope, ErrorRecord, envelope_response};

/// Error-handling middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use dealership::middleware::ErrorHandler;
///
/// let app = App::new().wrap(ErrorHandler::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ErrorHandler {
    dispatch: Option<Dispatch>,
}

impl ErrorHandler {
    /// Log through the process-wide subscriber.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log through `dispatch` instead of the process-wide subscriber.
    #[must_use]
    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerService {
            service,
            dispatch: self.dispatch.clone(),
        }))
    }
}

/// Service wrapper produced by [`ErrorHandler`].
pub struct ErrorHandlerService<S> {
    service: S,
    dispatch: Option<Dispatch>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let meta = RequestMeta::from_request(&req);
        let dispatch = self.dispatch.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let (outcome, status, failure) = match fut.await {
                Ok(res) => {
                    let (res, failure) = classify_response(res);
                    let status = res.status();
                    (Ok(res), status, failure)
                }
                Err(err) => {
                    let (response, failure, public) =
                        classify_error(&err, meta.request_id.as_deref());
                    let status = response.status();
                    let rendered: Error = InternalError::from_response(public, response).into();
                    (Err(rendered), status, Some(failure))
                }
            };
            let line = LogLine {
                meta: &meta,
                status,
                latency: started.elapsed(),
                failure: failure.as_ref(),
            };
            match &dispatch {
                Some(dispatch) => tracing::dispatcher::with_default(dispatch, || line.emit()),
                None => line.emit(),
            }
            outcome
        })
    }
}

/// Why a request did not succeed.
#[derive(Debug, Clone, PartialEq)]
enum Failure {
    /// The chain produced an [`AppError`].
    App(ErrorRecord),
    /// The chain produced some other error, replaced by a generic 500.
    Unhandled(String),
    /// No route matched.
    RouteNotFound,
}

impl Failure {
    fn code(&self) -> &'static str {
        match self {
            Self::App(record) => record.code.as_str(),
            Self::Unhandled(_) => "INTERNAL_ERROR",
            Self::RouteNotFound => "NOT_FOUND",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::App(record) => &record.message,
            Self::Unhandled(text) => text,
            Self::RouteNotFound => crate::inbound::http::error::ROUTE_NOT_FOUND_MESSAGE,
        }
    }
}

fn classify_response<B>(res: ServiceResponse<B>) -> (ServiceResponse<EitherBody<B>>, Option<Failure>)
where
    B: MessageBody + 'static,
{
    let record = res.response().extensions().get::<ErrorRecord>().cloned();
    if let Some(record) = record {
        return (res.map_into_left_body(), Some(Failure::App(record)));
    }

    let unhandled = res.response().error().map(ToString::to_string);
    if let Some(text) = unhandled {
        let replacement = envelope_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorEnvelope::internal(),
        );
        return (
            res.into_response(replacement).map_into_right_body(),
            Some(Failure::Unhandled(text)),
        );
    }

    if res.status() == StatusCode::NOT_FOUND && is_empty(res.response().body().size()) {
        let replacement = envelope_response(StatusCode::NOT_FOUND, &ErrorEnvelope::route_not_found());
        return (
            res.into_response(replacement).map_into_right_body(),
            Some(Failure::RouteNotFound),
        );
    }

    (res.map_into_left_body(), None)
}

/// Render an error raised by the inner service.
///
/// The request is gone by now, so the response travels back as an
/// [`InternalError`] carrying the finished envelope. Returns the response,
/// the failure to log and the client-safe message.
fn classify_error(err: &Error, request_id: Option<&str>) -> (HttpResponse, Failure, String) {
    let (mut response, failure, envelope) = match err.as_error::<AppError>() {
        Some(app) => (
            ResponseError::error_response(app),
            Failure::App(ErrorRecord::from(app)),
            ErrorEnvelope::from(app),
        ),
        None => (
            envelope_response(StatusCode::INTERNAL_SERVER_ERROR, &ErrorEnvelope::internal()),
            Failure::Unhandled(err.to_string()),
            ErrorEnvelope::internal(),
        ),
    };
    if let Some(value) = request_id.and_then(|id| HeaderValue::from_str(id).ok()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    (response, failure, envelope.message)
}

const fn is_empty(size: BodySize) -> bool {
    matches!(size, BodySize::None | BodySize::Sized(0))
}

/// Request attributes captured before the handler runs.
#[derive(Debug, Clone)]
struct RequestMeta {
    method: String,
    path: String,
    client_ip: Option<String>,
    user_agent: Option<String>,
    request_id: Option<String>,
}

impl RequestMeta {
    fn from_request(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().to_string(),
            path: req.path().to_owned(),
            client_ip: req
                .connection_info()
                .realip_remote_addr()
                .map(str::to_owned),
            user_agent: req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned),
            request_id: req
                .extensions()
                .get::<RequestId>()
                .map(ToString::to_string),
        }
    }
}

struct LogLine<'a> {
    meta: &'a RequestMeta,
    status: StatusCode,
    latency: Duration,
    failure: Option<&'a Failure>,
}

macro_rules! request_event {
    ($level:expr, $line:expr, $message:literal) => {{
        let line = $line;
        let (details, cause) = match line.failure {
            Some(Failure::App(record)) => (
                record
                    .details
                    .as_ref()
                    .map(|details| serde_json::Value::Object(details.clone()).to_string()),
                record.cause.clone(),
            ),
            _ => (None, None),
        };
        tracing::event!(
            $level,
            method = %line.meta.method,
            path = %line.meta.path,
            client_ip = line.meta.client_ip.as_deref(),
            status = line.status.as_u16(),
            latency_ms = u64::try_from(line.latency.as_millis()).unwrap_or(u64::MAX),
            user_agent = line.meta.user_agent.as_deref(),
            request_id = line.meta.request_id.as_deref(),
            error_code = line.failure.map(Failure::code),
            error_message = line.failure.map(Failure::message),
            details = details.as_deref(),
            cause = cause.as_deref(),
            $message
        );
    }};
}

impl LogLine<'_> {
    fn emit(&self) {
        if self.status.is_server_error() {
            request_event!(Level::ERROR, self, "request failed");
        } else if self.status.is_client_error() {
            request_event!(Level::WARN, self, "request rejected");
        } else {
            request_event!(Level::INFO, self, "request completed");
        }
    }
}

#[cfg(test)]
mod tests;
