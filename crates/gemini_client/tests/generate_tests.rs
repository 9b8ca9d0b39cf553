//! Integration tests for GeminiClient against a mocked provider

use std::time::Duration;

use gemini_client::{
    GeminiClient, GeminiConfig, GenerationError, GenerationResult, TextGenerator,
    EMPTY_GENERATION_TEXT,
};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn client_for(server: &MockServer, api_key: &str) -> GeminiClient {
    let config = GeminiConfig::default()
        .with_api_base(server.uri())
        .with_api_key(api_key);
    GeminiClient::new(config).expect("client")
}

fn candidate_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn sends_single_turn_envelope_and_returns_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(query_param("key", "test-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Say hi" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text("Hi there!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test-key");
    let text = client.generate("Say hi").await.expect("generation");

    assert_eq!(text, "Hi there!");
}

#[tokio::test]
async fn placeholder_key_makes_no_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "YOUR_SUPER_SECRET_GEMINI_KEY");
    let result = GenerationResult::from(client.generate("Say hi").await);

    assert_eq!(
        result,
        GenerationResult::failed("Server error: Gemini API Key not configured.")
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_key_makes_no_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = GeminiConfig::default().with_api_base(mock_server.uri());
    let client = GeminiClient::new(config).unwrap();

    let err = client.generate("Say hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::NotConfigured));
}

#[tokio::test]
async fn empty_text_returns_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text("")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test-key");
    let result = GenerationResult::from(client.generate("Say hi").await);

    assert_eq!(result, GenerationResult::generated(EMPTY_GENERATION_TEXT));
}

#[tokio::test]
async fn missing_candidates_is_reported_as_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test-key");
    let err = client.generate("Say hi").await.unwrap_err();

    assert!(matches!(err, GenerationError::UnexpectedStructure));
    assert_eq!(
        GenerationResult::from(Err(err)),
        GenerationResult::failed("AI generation failed: Unexpected response structure.")
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": { "code": 500 } })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test-key");
    let result = GenerationResult::from(client.generate("Say hi").await);

    match result {
        GenerationResult::Failed { error } => assert!(error.contains("500"), "{error}"),
        other => panic!("expected error, got {other:?}"),
    }
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn non_json_success_body_is_unexpected_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test-key");
    let err = client.generate("Say hi").await.unwrap_err();

    assert!(matches!(err, GenerationError::Unexpected(_)));
    assert!(err
        .to_string()
        .starts_with("An unexpected server error occurred: "));
}

#[tokio::test]
async fn timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate_text("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = GeminiConfig::default()
        .with_api_base(mock_server.uri())
        .with_api_key("test-key")
        .with_timeout(Duration::from_millis(200));
    let client = GeminiClient::new(config).unwrap();

    let err = client.generate("Say hi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Transport(_)));
}

#[tokio::test]
async fn connection_refused_is_transport_error_without_key_leak() {
    let config = GeminiConfig::default()
        .with_api_base("http://127.0.0.1:1")
        .with_api_key("leak-check-key");
    let client = GeminiClient::new(config).unwrap();

    let err = client.generate("Say hi").await.unwrap_err();
    let message = err.to_string();

    assert!(matches!(err, GenerationError::Transport(_)));
    assert!(message.starts_with("An unknown error occurred with AI service: "));
    assert!(!message.contains("leak-check-key"));
}

#[tokio::test]
async fn null_content_is_reported_as_structure_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": null, "finishReason": "SAFETY" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test-key");
    let err = client.generate("Say hi").await.unwrap_err();

    assert!(matches!(err, GenerationError::UnexpectedStructure));
}
