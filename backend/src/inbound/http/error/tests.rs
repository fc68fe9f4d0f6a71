//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn storage_failure(expected_trace_id: String) -> Error {
    Error::internal("complaint repository error: CHECK constraint failed: status")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"table": "complaints"}))
}

#[fixture]
fn invalid_request_case(expected_trace_id: String) -> Error {
    Error::invalid_request("reason must not be empty")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"field": "reason", "code": "empty"}))
}

#[rstest]
#[case(Error::invalid_request("User already exists"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("Invalid token"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("Forbidden"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("Complaint not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("Room is full"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn render(error: Error, expected_trace_id: Option<&str>) -> (StatusCode, Error) {
    let response = ResponseError::error_response(&error);
    let status = response.status();

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, payload)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(storage_failure: Error, expected_trace_id: String) {
    let (status, redacted) = render(storage_failure, Some(expected_trace_id.as_str())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), REDACTED_MESSAGE);
    assert_eq!(redacted.trace_id(), Some(expected_trace_id.as_str()));
    assert!(redacted.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(
    invalid_request_case: Error,
    expected_trace_id: String,
) {
    let (status, payload) = render(invalid_request_case, Some(expected_trace_id.as_str())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
    assert_eq!(payload.message(), "reason must not be empty");
    assert_eq!(
        payload.details(),
        Some(&json!({"field": "reason", "code": "empty"}))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::forbidden("Forbidden");

    let (status, payload) = render(error, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(payload.message(), "Forbidden");
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), REDACTED_MESSAGE);
    assert_eq!(err.trace_id(), None);
    assert_eq!(err.details(), None);
}
