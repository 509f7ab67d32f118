use rezen_client::error::{ApiFailure, RezenError};

#[test]
fn test_display_network() {
    let error = RezenError::Network("connection refused".to_string());
    assert_eq!(error.to_string(), "network error: connection refused");
}

#[test]
fn test_display_invalid_input() {
    let error = RezenError::InvalidInput("id must be a UUID".to_string());
    assert_eq!(error.to_string(), "invalid input: id must be a UUID");
}

#[test]
fn test_display_rate_limit() {
    let error = RezenError::from_status(429, "/teams/search/all", "slow down");
    assert_eq!(error.to_string(), "rate limit exceeded: slow down");
}

#[test]
fn test_status_mapping_is_total() {
    assert!(matches!(
        RezenError::from_status(400, "/x", ""),
        RezenError::Validation(_)
    ));
    assert!(matches!(
        RezenError::from_status(401, "/x", ""),
        RezenError::Authentication(_)
    ));
    assert!(matches!(
        RezenError::from_status(404, "/x", ""),
        RezenError::NotFound(_)
    ));
    assert!(matches!(
        RezenError::from_status(429, "/x", ""),
        RezenError::RateLimit(_)
    ));
    for status in [500u16, 502, 503, 504, 599] {
        assert!(matches!(
            RezenError::from_status(status, "/x", ""),
            RezenError::Server(_)
        ));
    }
    // Anything unmapped falls through to the generic variant, status kept.
    let teapot = RezenError::from_status(418, "/x", "");
    assert!(matches!(teapot, RezenError::Api(_)));
    assert_eq!(teapot.status(), Some(418));
}

#[test]
fn test_json_error_body_is_unpacked() {
    let body = r#"{"message": "missing field: price", "code": "INVALID"}"#;
    let error = RezenError::from_status(400, "/transactions", body);
    match &error {
        RezenError::Validation(failure) => {
            assert_eq!(failure.message, "missing field: price");
            assert_eq!(failure.status, Some(400));
            let payload = failure.payload.as_ref().expect("structured payload kept");
            assert_eq!(payload["code"], "INVALID");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_non_json_error_body_never_panics() {
    // A plain-text error page must become the message, not a parse error.
    let error = RezenError::from_status(502, "/x", "<html>Bad Gateway</html>");
    match &error {
        RezenError::Server(failure) => {
            assert_eq!(failure.message, "<html>Bad Gateway</html>");
            assert!(failure.payload.is_none());
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[test]
fn test_empty_error_body_uses_status() {
    let error = RezenError::from_status(404, "/agents/x", "");
    assert_eq!(error.to_string(), "not found: HTTP 404");
}

#[test]
fn test_owner_info_hint_on_400() {
    let path = "/transaction-builder/abc/owner-info";
    let error = RezenError::from_status(400, path, r#"{"message": "rejected"}"#);
    assert!(error.to_string().contains("Hint: owner agent info"));

    let other = RezenError::from_status(400, "/transaction-builder/abc/buyers", "rejected");
    assert!(!other.to_string().contains("Hint:"));
}

#[test]
fn test_hint_only_applies_to_validation() {
    // The path marker alone is not enough; only a 400 gets the hint.
    let error = RezenError::from_status(404, "/transaction-builder/abc/owner-info", "");
    assert!(!error.to_string().contains("Hint:"));
}

#[test]
fn test_translation_is_idempotent() {
    let body = r#"{"message": "bad price"}"#;
    let first = RezenError::from_status(400, "/t/owner-info", body);
    let second = RezenError::from_status(400, "/t/owner-info", body);
    assert_eq!(
        std::mem::discriminant(&first),
        std::mem::discriminant(&second)
    );
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_api_failure_from_response_keeps_raw_text() {
    let failure = ApiFailure::from_response(503, "upstream unavailable");
    assert_eq!(failure.message, "upstream unavailable");
    assert_eq!(failure.status, Some(503));
}

#[test]
fn test_from_serde_json() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
    let error: RezenError = serde_error.into();
    assert!(matches!(error, RezenError::Json(_)));
}
