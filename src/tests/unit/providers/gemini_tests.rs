//! Gemini Provider Unit Tests

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::llm::providers::{GeminiProvider, ProviderConfig};
use crate::core::llm::{CompletionRequest, LlmError, LlmProvider};

const MODEL: &str = "gemini-2.0-flash-exp";

fn provider_for(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new(
        "AIzaTestKey1234567890123456789012".to_string(),
        MODEL.to_string(),
        Some(server.uri()),
    )
}

fn generate_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_provider_identity() {
    let provider = GeminiProvider::new("AIzaKey".to_string(), MODEL.to_string(), None);
    assert_eq!(provider.id(), "gemini");
    assert_eq!(provider.name(), "Gemini");
    assert_eq!(provider.model(), MODEL);
    assert!(!provider.supports_images());
}

#[test]
fn test_api_key_format_check() {
    assert!(GeminiProvider::is_valid_api_key_format(
        "AIzaSyA1234567890abcdefghijklmnop"
    ));
    assert!(!GeminiProvider::is_valid_api_key_format("sk-openai-style"));
    assert!(!GeminiProvider::is_valid_api_key_format("AIza"));
}

#[test]
fn test_config_builds_gemini_provider() {
    let config = ProviderConfig::from_parts("gemini", "AIzaKey", MODEL);
    assert_eq!(config.provider_id(), "gemini");
    let provider = config.create_provider();
    assert_eq!(provider.id(), "gemini");
}

// =============================================================================
// Completion
// =============================================================================

#[tokio::test]
async fn test_complete_sends_key_as_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .and(query_param("key", "AIzaTestKey1234567890123456789012"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "nghiên cứu thị trường" }] }],
            "generationConfig": { "temperature": 0.3, "maxOutputTokens": 1500 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("insights")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .complete(
            CompletionRequest::new("nghiên cứu thị trường")
                .with_temperature(0.3)
                .with_max_tokens(1500),
        )
        .await
        .unwrap();

    assert_eq!(response.content, "insights");
    assert_eq!(response.provider, "gemini");
    assert_eq!(response.model, MODEL);
}

#[tokio::test]
async fn test_system_prompt_becomes_system_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("ok")))
        .mount(&server)
        .await;

    provider_for(&server)
        .complete(CompletionRequest::new("hi").with_system_prompt("bạn là nhà nghiên cứu"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        "bạn là nhà nghiên cứu"
    );
}

#[tokio::test]
async fn test_blank_key_short_circuits_without_io() {
    let server = MockServer::start().await;
    let provider = GeminiProvider::new(String::new(), MODEL.to_string(), Some(server.uri()));

    let err = provider
        .complete(CompletionRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::NotConfigured(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_forbidden_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::AuthError(_)));
}

#[tokio::test]
async fn test_api_error_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new("hi"))
        .await
        .unwrap_err();
    match err {
        LlmError::ApiError { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota exceeded");
        }
        other => panic!("expected ApiError, got {other}"),
    }
}

#[tokio::test]
async fn test_empty_candidates_maps_to_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .complete(CompletionRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

// =============================================================================
// Connection probe
// =============================================================================

#[tokio::test]
async fn test_connection_probe_uses_minimal_generate_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "maxOutputTokens": 1 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(generate_response("pong")))
        .expect(1)
        .mount(&server)
        .await;

    let status = provider_for(&server).test_connection().await;
    assert!(status.success);
    assert_eq!(
        status.message,
        "Kết nối thành công với Gemini 2.0 Flash (Experimental)"
    );
}

#[tokio::test]
async fn test_connection_probe_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}:generateContent")))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let status = provider_for(&server).test_connection().await;
    assert!(!status.success);
    assert_eq!(status.message, "Gemini API Error: 400");
}

#[tokio::test]
async fn test_image_generation_unsupported() {
    let provider = GeminiProvider::new("AIzaKey".to_string(), MODEL.to_string(), None);
    let err = provider.generate_image("prompt").await.unwrap_err();
    assert!(matches!(err, LlmError::ImageNotSupported(_)));
}
