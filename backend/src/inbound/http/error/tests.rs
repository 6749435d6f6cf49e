//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

#[derive(Debug, thiserror::Error)]
#[error("connection refused by 10.0.0.7")]
struct Refused;

async fn envelope_of(error: &AppError) -> (StatusCode, ErrorEnvelope) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("envelope JSON");
    (status, envelope)
}

#[rstest]
fn status_code_follows_taxonomy() {
    for code in ErrorCode::ALL {
        let err = AppError::new(code, "x");
        assert_eq!(
            ResponseError::status_code(&err).as_u16(),
            code.http_status(),
            "status for {code}"
        );
    }
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_their_message() {
    let err = AppError::not_found("Customer", "42");
    let (status, envelope) = envelope_of(&err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        envelope,
        ErrorEnvelope {
            code: ErrorCode::NotFound,
            message: "Customer with ID '42' not found".to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn server_errors_hide_raw_text() {
    let err = AppError::wrap(Refused, ErrorCode::InternalError, "pool exhausted on db-2");
    let (status, envelope) = envelope_of(&err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(envelope, ErrorEnvelope::internal());
}

#[rstest]
#[actix_web::test]
async fn details_are_not_serialized() {
    let err = AppError::invalid_input("email is required").with_detail("field", "email");
    let response = ResponseError::error_response(&err);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let value: Value = serde_json::from_slice(&bytes).expect("json");

    assert_eq!(
        value,
        serde_json::json!({"code": "INVALID_INPUT", "message": "email is required"})
    );
}

#[rstest]
fn response_carries_error_record() {
    let err = AppError::internal(Refused).with_detail("attempt", 3);
    let response = ResponseError::error_response(&err);
    let record = response
        .extensions()
        .get::<ErrorRecord>()
        .cloned()
        .expect("error record attached");

    assert_eq!(record.code, ErrorCode::InternalError);
    assert_eq!(record.message, INTERNAL_ERROR_MESSAGE);
    assert_eq!(record.cause.as_deref(), Some("connection refused by 10.0.0.7"));
    assert_eq!(
        record.details.and_then(|d| d.get("attempt").cloned()),
        Some(Value::from(3))
    );
}
