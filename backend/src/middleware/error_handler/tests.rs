//! Tests for the error-handling middleware.

use std::io;
use std::sync::{Arc, Mutex};

use actix_web::body::to_bytes;
use actix_web::test::{TestRequest, call_service, init_service, read_body, try_call_service};
use actix_web::{App, HttpResponse, web};
use futures_util::future::Either;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tracing_subscriber::fmt::MakeWriter;

use super::*;
use crate::domain::ErrorCode;
use crate::middleware::RequestIdMiddleware;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<Value> {
        let bytes = self.0.lock().expect("log buffer lock").clone();
        String::from_utf8(bytes)
            .expect("utf8 logs")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json log line"))
            .collect()
    }

    fn single_line(&self) -> Value {
        let mut lines = self.lines();
        assert_eq!(lines.len(), 1, "expected exactly one log line: {lines:?}");
        lines.remove(0)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[fixture]
fn logs() -> CapturedLogs {
    CapturedLogs::default()
}

fn handler_for(logs: &CapturedLogs) -> ErrorHandler {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::INFO)
        .with_writer(logs.clone())
        .finish();
    ErrorHandler::with_dispatch(Dispatch::new(subscriber))
}

async fn missing_customer() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("Customer", "nope"))
}

#[derive(Debug, thiserror::Error)]
#[error("socket closed by peer 10.1.2.3")]
struct SocketClosed;

async fn broken_pipe() -> Result<HttpResponse, AppError> {
    Err(AppError::internal(SocketClosed).with_detail("attempt", 2))
}

async fn raw_actix_error() -> Result<HttpResponse, actix_web::Error> {
    Err(actix_web::error::ErrorBadRequest("secret table users_v2 missing"))
}

async fn ok() -> HttpResponse {
    HttpResponse::Ok().body("fine")
}

async fn custom_not_found() -> HttpResponse {
    HttpResponse::NotFound().body("custom body")
}

async fn call(
    logs: &CapturedLogs,
    uri: &str,
) -> (StatusCode, Option<String>, Value) {
    let app = init_service(
        App::new()
            .wrap(handler_for(logs))
            .wrap(RequestIdMiddleware)
            .route("/customers/nope", web::get().to(missing_customer))
            .route("/pipe", web::get().to(broken_pipe))
            .route("/raw", web::get().to(raw_actix_error))
            .route("/ok", web::get().to(ok))
            .route("/custom-404", web::get().to(custom_not_found)),
    )
    .await;
    let req = TestRequest::get()
        .uri(uri)
        .insert_header((header::USER_AGENT, "curl/8.5.0"))
        .insert_header(("x-request-id", "req-7"))
        .to_request();
    let res = call_service(&app, req).await;
    let status = res.status();
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = read_body(res).await;
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };
    (status, request_id, body)
}

#[rstest]
#[actix_web::test]
async fn app_errors_keep_their_envelope(logs: CapturedLogs) {
    let (status, _, body) = call(&logs, "/customers/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"code": "NOT_FOUND", "message": "Customer with ID 'nope' not found"})
    );

    let line = logs.single_line();
    assert_eq!(line["level"], "WARN");
    assert_eq!(line["fields"]["error_code"], "NOT_FOUND");
    assert_eq!(
        line["fields"]["error_message"],
        "Customer with ID 'nope' not found"
    );
    assert_eq!(line["fields"]["status"], 404);
}

#[rstest]
#[actix_web::test]
async fn unmatched_routes_get_a_single_envelope(logs: CapturedLogs) {
    let (status, request_id, body) = call(&logs, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"code": "NOT_FOUND", "message": "Resource not found"})
    );
    assert_eq!(request_id.as_deref(), Some("req-7"));
    assert_eq!(logs.single_line()["fields"]["error_code"], "NOT_FOUND");
}

#[rstest]
#[actix_web::test]
async fn handler_written_404_bodies_are_untouched(logs: CapturedLogs) {
    let (status, _, body) = call(&logs, "/custom-404").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::String("custom body".to_owned()));
    assert!(logs.single_line()["fields"].get("error_code").is_none());
}

#[rstest]
#[actix_web::test]
async fn foreign_errors_become_generic_500(logs: CapturedLogs) {
    let (status, _, body) = call(&logs, "/raw").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"code": "INTERNAL_ERROR", "message": "Internal server error"})
    );

    let line = logs.single_line();
    assert_eq!(line["level"], "ERROR");
    assert_eq!(line["fields"]["error_code"], "INTERNAL_ERROR");
    assert_eq!(
        line["fields"]["error_message"],
        "secret table users_v2 missing"
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_log_cause_and_details_but_hide_them(logs: CapturedLogs) {
    let (status, _, body) = call(&logs, "/pipe").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert!(!body.to_string().contains("10.1.2.3"));

    let line = logs.single_line();
    assert_eq!(line["level"], "ERROR");
    assert_eq!(line["fields"]["cause"], "socket closed by peer 10.1.2.3");
    assert_eq!(line["fields"]["details"], r#"{"attempt":2}"#);
}

#[rstest]
#[actix_web::test]
async fn successful_requests_log_at_info(logs: CapturedLogs) {
    let (status, _, _) = call(&logs, "/ok").await;

    assert_eq!(status, StatusCode::OK);
    let line = logs.single_line();
    let fields = &line["fields"];
    assert_eq!(line["level"], "INFO");
    assert_eq!(fields["method"], "GET");
    assert_eq!(fields["path"], "/ok");
    assert_eq!(fields["user_agent"], "curl/8.5.0");
    assert_eq!(fields["request_id"], "req-7");
    assert!(fields["latency_ms"].is_u64());
    assert!(fields.get("error_code").is_none());
}

#[rstest]
fn failure_codes_match_the_taxonomy() {
    let record = ErrorRecord {
        code: ErrorCode::AlreadyExists,
        message: "Car with ID 'c1' already exists".to_owned(),
        details: None,
        cause: None,
    };
    assert_eq!(Failure::App(record).code(), "ALREADY_EXISTS");
    assert_eq!(Failure::Unhandled("x".to_owned()).code(), "INTERNAL_ERROR");
    assert_eq!(Failure::RouteNotFound.message(), "Resource not found");
}

#[rstest]
#[actix_web::test]
async fn plain_routes_pass_through_unchanged() {
    let app = init_service(
        App::new()
            .wrap(ErrorHandler::new())
            .route("/ok", web::get().to(ok)),
    )
    .await;

    let res = call_service(&app, TestRequest::get().uri("/ok").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_body(res).await, "fine");
}

/// Body and request id header of an error returned by the service chain.
async fn rendered(err: &Error) -> (StatusCode, Option<String>, Value) {
    let res = err.error_response();
    let status = res.status();
    let request_id = res
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(res.into_body()).await.expect("error body");
    (
        status,
        request_id,
        serde_json::from_slice(&bytes).expect("json error body"),
    )
}

async fn call_failing_chain(logs: &CapturedLogs, error: fn() -> Error) -> Error {
    let app = init_service(
        App::new()
            .wrap_fn(move |req, srv| {
                if req.path() == "/fail" {
                    Either::Left(futures_util::future::ready(Err(error())))
                } else {
                    Either::Right(srv.call(req))
                }
            })
            .wrap(handler_for(logs))
            .wrap(RequestIdMiddleware)
            .route("/ok", web::get().to(ok)),
    )
    .await;
    let req = TestRequest::get()
        .uri("/fail")
        .insert_header(("x-request-id", "req-9"))
        .to_request();
    match try_call_service(&app, req).await {
        Ok(res) => panic!("expected the chain to fail, got {}", res.status()),
        Err(err) => err,
    }
}

#[rstest]
#[actix_web::test]
async fn middleware_errors_become_generic_500(logs: CapturedLogs) {
    let err = call_failing_chain(&logs, || {
        actix_web::error::ErrorBadGateway("upstream 10.9.8.7 refused")
    })
    .await;

    let (status, request_id, body) = rendered(&err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"code": "INTERNAL_ERROR", "message": "Internal server error"})
    );
    assert_eq!(request_id.as_deref(), Some("req-9"));

    let line = logs.single_line();
    assert_eq!(line["level"], "ERROR");
    assert_eq!(line["fields"]["status"], 500);
    assert_eq!(line["fields"]["error_message"], "upstream 10.9.8.7 refused");
}

#[rstest]
#[actix_web::test]
async fn middleware_app_errors_keep_their_status(logs: CapturedLogs) {
    let err = call_failing_chain(&logs, || {
        Error::from(AppError::invalid_input("tenant header is required"))
    })
    .await;

    let (status, _, body) = rendered(&err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"code": "INVALID_INPUT", "message": "tenant header is required"})
    );
    assert_eq!(logs.single_line()["level"], "WARN");
}
