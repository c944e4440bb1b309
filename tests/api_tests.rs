use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sentiq::api::{ApiClient, ChatClient};
use sentiq::prompt::build_messages;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(
        server.uri(),
        "test-key".to_string(),
        "test-model".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn complete_returns_trimmed_assistant_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({"model": "test-model"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "  {\"label\": \"Positive\"}  "}}]
        })))
        .mount(&server)
        .await;

    let content = client_for(&server)
        .complete(build_messages("I love this"))
        .await
        .unwrap();
    assert_eq!(content, r#"{"label": "Positive"}"#);
}

#[tokio::test]
async fn auth_failure_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(build_messages("hello"))
        .await
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("401"), "missing status in: {message}");
    assert!(message.contains("invalid api key"), "missing body in: {message}");
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .complete(build_messages("hello"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no choices"));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "ok"}}]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(
        format!("{}/", server.uri()),
        "test-key".to_string(),
        "test-model".to_string(),
    )
    .unwrap();
    assert_eq!(client.complete(build_messages("hi")).await.unwrap(), "ok");
}
