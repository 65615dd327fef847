use std::time::Duration;

use scribe_core::{
    MessageAgent, config::AgentConfig, error::ScribeError, generic::Message,
    provider::CompletionClient,
};
use scribe_openai::{OpenAiAdapter, OpenAiAdapterBuilder};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

fn adapter(server: &MockServer) -> OpenAiAdapter {
    OpenAiAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5))
        .build()
        .expect("adapter should build")
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21}
    })
}

#[tokio::test]
async fn complete_happy_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(json!({
            "model": "gpt-4o",
            "messages": [{"role": "user", "content": "Hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hi there")))
        .expect(1)
        .mount(&server)
        .await;

    let text = adapter(&server)
        .complete("gpt-4o", &[Message::user("Hello")], false)
        .await
        .expect("completion should succeed");

    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn web_search_and_temperature_are_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "user", "content": "news?"}],
            "temperature": 0.25,
            "web_search": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("fresh")))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = OpenAiAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .with_temperature(0.25)
        .build()
        .unwrap();

    let text = adapter
        .complete("gpt-4o-mini", &[Message::user("news?")], true)
        .await
        .unwrap();

    assert_eq!(text, "fresh");
}

#[tokio::test]
async fn non_success_status_is_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = adapter(&server)
        .complete("gpt-4o", &[Message::user("Hello")], false)
        .await
        .expect_err("429 should fail");

    assert!(err.message().contains("429"), "{err}");
    assert!(err.message().contains("slow down"), "{err}");
}

#[tokio::test]
async fn malformed_json_is_a_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_bytes(b"{not-json".to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = adapter(&server)
        .complete("gpt-4o", &[Message::user("Hello")], false)
        .await
        .expect_err("malformed json should fail");

    assert!(err.message().starts_with("couldn’t parse body"), "{err}");
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("too late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let adapter = OpenAiAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = adapter
        .complete("gpt-4o", &[Message::user("Hello")], false)
        .await
        .expect_err("request should time out");

    assert!(err.message().starts_with("request failed"), "{err}");
}

#[tokio::test]
async fn agent_translates_adapter_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let agent = MessageAgent::new(AgentConfig::new("gpt-4o").unwrap(), adapter(&server));

    let err = agent.send_message("Hello").await.unwrap_err();

    assert!(matches!(err, ScribeError::AgentCommunication(_)));
    assert!(
        err.to_string()
            .starts_with("failed to communicate with AI: OpenAI returned non-success status 500"),
        "{err}"
    );
}
