//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn envelope_of(error: &Error) -> ErrorEnvelope {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope JSON deserialisation succeeds")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::method_not_allowed("legacy"), StatusCode::METHOD_NOT_ALLOWED)]
#[case(Error::unprocessable("no answer"), StatusCode::UNPROCESSABLE_ENTITY)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[case(Error::invalid_request("bad"), 400, "Bad Request")]
#[case(Error::not_found("missing"), 404, "Not Found")]
#[case(
    Error::method_not_allowed("legacy"),
    405,
    "Method is Not allowed for requested URL"
)]
#[case(Error::unprocessable("no answer"), 422, "Unprocessable entity")]
#[case(Error::internal("boom"), 500, "Server Error")]
#[actix_web::test]
async fn envelope_uses_fixed_public_message(
    #[case] error: Error,
    #[case] status: u16,
    #[case] message: &str,
) {
    let envelope = envelope_of(&error).await;
    assert_eq!(
        envelope,
        ErrorEnvelope {
            success: false,
            error: status,
            message: message.to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_details_never_reach_the_body() {
    let error = Error::internal("db password rejected").with_details(json!({"secret": "x"}));
    let response = ResponseError::error_response(&error);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");

    assert_eq!(
        body,
        json!({"success": false, "error": 500, "Message": "Server Error"})
    );
}

#[rstest]
fn trace_id_is_echoed_in_header() {
    let error = Error::not_found("missing").with_trace_id(TRACE_ID);
    let response = ResponseError::error_response(&error);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("Trace-Id header is set by error_response")
        .to_str()
        .expect("Trace-Id is ASCII");
    assert_eq!(header, TRACE_ID);
}

#[rstest]
fn no_trace_header_without_trace_id() {
    let response = ResponseError::error_response(&Error::not_found("missing"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
