//! Problem Details (RFC 7807) assertions for backend responses.
//!
//! Mirrors the backend's error body shape locally so tests can check the
//! contract without importing backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderMap, CONTENT_TYPE, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Prefix every `type` URI in an error body starts with.
pub const ERROR_TYPE_PREFIX: &str = "https://weddingmate.app/errors/";

#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Check already-split response parts against the error contract and return
/// the parsed body for any further assertions.
///
/// Validates:
/// - status matches
/// - content type is `application/problem+json`
/// - `x-trace-id` header equals the body `trace_id`
/// - `code`, `status` and `type` agree with each other
/// - 401 carries `WWW-Authenticate: Bearer`, other statuses do not
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let body_str = String::from_utf8_lossy(body_bytes);
    assert_eq!(status, expected_status, "unexpected status, body: {body_str}");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let problem: ProblemDetailsLike = serde_json::from_slice(body_bytes)
        .unwrap_or_else(|e| panic!("body is not Problem Details ({e}): {body_str}"));

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_id_header.is_empty(), "x-trace-id must not be empty");
    assert_eq!(
        problem.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.type_, format!("{ERROR_TYPE_PREFIX}{expected_code}"));
    assert!(!problem.title.is_empty());

    let www_auth = headers.get(WWW_AUTHENTICATE);
    if expected_status == StatusCode::UNAUTHORIZED {
        assert_eq!(
            www_auth.and_then(|v| v.to_str().ok()),
            Some("Bearer"),
            "401 responses must carry WWW-Authenticate: Bearer"
        );
    } else {
        assert!(
            www_auth.is_none(),
            "{expected_status} responses must not carry WWW-Authenticate"
        );
    }

    if let Some(expected_detail) = expected_detail_contains {
        assert!(
            problem.detail.contains(expected_detail),
            "expected detail to contain '{expected_detail}', got '{}'",
            problem.detail
        );
    }

    problem
}

/// Consume a test `ServiceResponse` and assert it is a Problem Details error.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_detail_contains,
    )
}
