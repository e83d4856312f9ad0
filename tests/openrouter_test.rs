//! Integration tests for the OpenRouter oracle adapters against a mock
//! HTTP server.

use std::sync::Arc;

use ascent::domain::error::OracleError;
use ascent::domain::models::OracleConfig;
use ascent::domain::ports::{Evaluator, Generator};
use ascent::infrastructure::openrouter::{OpenRouterClient, TweetEvaluator, TweetGenerator};

fn config_for(server: &mockito::ServerGuard) -> OracleConfig {
    OracleConfig {
        base_url: server.url(),
        ..OracleConfig::default()
    }
}

fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

#[tokio::test]
async fn generator_returns_trimmed_completion() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_header("http-referer", "http://localhost:3000")
        .with_status(200)
        .with_body(completion_body("  A catchy tweet #rust  "))
        .create_async()
        .await;

    let client = Arc::new(OpenRouterClient::new(&config_for(&server), "test-key").unwrap());
    let tweet = TweetGenerator::new(client).generate("source").await.unwrap();

    assert_eq!(tweet, "A catchy tweet #rust");
    mock.assert_async().await;
}

#[tokio::test]
async fn evaluator_parses_score_list_from_completion() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body(
            r#"[{"category": "Clarity", "score": 7}, {"category": "Hook", "score": 4}]"#,
        ))
        .create_async()
        .await;

    let client = Arc::new(OpenRouterClient::new(&config_for(&server), "test-key").unwrap());
    let scores = TweetEvaluator::new(client)
        .score("a tweet", "Clarity; Hook")
        .await
        .unwrap();

    assert_eq!(scores.total(), 11);
    assert_eq!(scores.scores()[0].category, "Clarity");
}

#[tokio::test]
async fn evaluator_flags_malformed_scores() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body("I would rate this an 8 overall."))
        .create_async()
        .await;

    let client = Arc::new(OpenRouterClient::new(&config_for(&server), "test-key").unwrap());
    let result = TweetEvaluator::new(client).score("a tweet", "Clarity").await;

    assert!(matches!(result, Err(OracleError::MalformedScores(_))));
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": "bad key"}"#)
        .create_async()
        .await;

    let client = Arc::new(OpenRouterClient::new(&config_for(&server), "bad-key").unwrap());
    let result = TweetGenerator::new(client).generate("source").await;

    assert!(matches!(result, Err(OracleError::Auth)));
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let client = Arc::new(OpenRouterClient::new(&config_for(&server), "test-key").unwrap());
    let result = TweetGenerator::new(client).generate("source").await;

    match result {
        Err(OracleError::Api { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_completion_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body("   "))
        .create_async()
        .await;

    let client = Arc::new(OpenRouterClient::new(&config_for(&server), "test-key").unwrap());
    let result = TweetGenerator::new(client).generate("source").await;

    assert!(matches!(result, Err(OracleError::EmptyResponse)));
}
