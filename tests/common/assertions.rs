//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert an error response with the `{status, error}` body
pub fn assert_api_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}",
        expected.as_u16(),
        json["status"]
    );
    assert!(json["error"].is_string(), "Expected error message: {json}");
}

/// Assert a hex color string of the form `#RRGGBB`
pub fn assert_hex(value: &serde_json::Value) {
    let hex = value.as_str().expect("Expected hex string");
    assert_eq!(hex.len(), 7, "Bad hex {hex}");
    assert!(hex.starts_with('#'), "Bad hex {hex}");
    assert!(
        hex[1..].chars().all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch)),
        "Bad hex {hex}"
    );
}
