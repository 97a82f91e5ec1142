//! Error body test helpers.
//!
//! Asserts the stable error contract without depending on backend types:
//! JSON clients receive `{"error": "<message>"}`, browsers receive the
//! message as plain text, and both carry an `x-trace-id` header that
//! matches `x-request-id`.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorBodyLike {
    error: String,
}

/// Assert a JSON error response and return its message.
pub fn assert_json_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
) -> String {
    assert_eq!(status, expected_status);
    assert_trace_headers(headers);

    let content_type = header_str(headers, "content-type");
    assert!(
        content_type.starts_with("application/json"),
        "expected JSON error, got content-type {content_type}"
    );

    let parsed: ErrorBodyLike =
        serde_json::from_slice(body).expect("error body should be {\"error\": string}");
    assert!(!parsed.error.is_empty(), "error message should not be empty");
    parsed.error
}

/// Assert a plain-text error response (HTML clients) and return its message.
pub fn assert_text_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
) -> String {
    assert_eq!(status, expected_status);
    assert_trace_headers(headers);

    let content_type = header_str(headers, "content-type");
    assert!(
        content_type.starts_with("text/plain"),
        "expected plain-text error, got content-type {content_type}"
    );

    String::from_utf8(body.to_vec()).expect("error body should be UTF-8")
}

fn assert_trace_headers(headers: &HeaderMap) {
    let trace_id = header_str(headers, "x-trace-id");
    assert!(!trace_id.is_empty(), "x-trace-id should not be empty");

    if let Some(request_id) = headers.get("x-request-id") {
        assert_eq!(
            request_id.to_str().expect("x-request-id should be valid UTF-8"),
            trace_id,
            "x-trace-id should match x-request-id"
        );
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .unwrap_or_else(|| panic!("{name} header should be present"))
        .to_str()
        .unwrap_or_else(|_| panic!("{name} header should be valid UTF-8"))
}
