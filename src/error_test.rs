use super::*;
use serde_json::json;

#[test]
fn from_status_extracts_body_message() {
    let err = ApiError::from_status(500, json!({ "code": 1, "message": "db down" }));
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "db down");
    assert_eq!(err.to_string(), "HTTP 500: db down");
}

#[test]
fn from_status_without_message_falls_back_to_display() {
    let err = ApiError::from_status(502, json!({ "code": 1 }));
    assert_eq!(err.message(), "HTTP 502: request failed");
}

#[test]
fn from_status_ignores_empty_message() {
    let err = ApiError::from_status(400, json!({ "message": "" }));
    assert!(matches!(err, ApiError::Status { message: None, .. }));
}

#[test]
fn auth_failure_only_for_401_and_403() {
    assert!(ApiError::from_status(401, Value::Null).is_auth_failure());
    assert!(ApiError::from_status(403, Value::Null).is_auth_failure());
    assert!(!ApiError::from_status(404, Value::Null).is_auth_failure());
    assert!(!ApiError::from_status(500, Value::Null).is_auth_failure());
    assert!(!ApiError::Transport("refused".into()).is_auth_failure());
}

#[test]
fn transport_message_uses_error_text() {
    let err = ApiError::Transport("connection refused".into());
    assert_eq!(err.status(), None);
    assert_eq!(err.message(), "transport failed: connection refused");
}

#[test]
fn timeout_message_names_duration() {
    let err = ApiError::Timeout { timeout_ms: 15_000 };
    assert_eq!(err.message(), "request timed out after 15000 ms");
}
