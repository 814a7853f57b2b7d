use super::*;

// =============================================================================
// LlmError display
// =============================================================================

#[test]
fn missing_api_key_names_the_variable() {
    let err = LlmError::MissingApiKey { var: "OPENAI_API_KEY".into() };
    assert_eq!(err.to_string(), "missing API key: env var OPENAI_API_KEY not set");
}

#[test]
fn api_response_reports_status_only() {
    let err = LlmError::ApiResponse { status: 401, body: "{\"error\":\"secret detail\"}".into() };
    assert_eq!(err.to_string(), "API response error: status 401");
}

#[test]
fn api_request_carries_transport_message() {
    let err = LlmError::ApiRequest("connection refused".into());
    assert_eq!(err.to_string(), "API request failed: connection refused");
}

// =============================================================================
// Message serde
// =============================================================================

#[test]
fn message_serializes_as_role_and_content() {
    let msg = Message::new("user", "hello");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hello" }));
}

#[test]
fn message_rejects_missing_content() {
    let result = serde_json::from_value::<Message>(serde_json::json!({ "role": "user" }));
    assert!(result.is_err());
}

#[test]
fn message_rejects_non_string_content() {
    let result = serde_json::from_value::<Message>(serde_json::json!({ "role": "user", "content": 42 }));
    assert!(result.is_err());
}
