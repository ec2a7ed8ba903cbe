/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{client_for, setup_mock_server};
use serde_json::json;
use task_dashboard_adapter::{
    AdvisorApi, ApiOutcome, ClientConfig, DashboardClient, DashboardError, RequestKind,
    RequestMode, Task,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(DashboardClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
    };
    let _client = assert_ok!(DashboardClient::with_config(config));
}

#[tokio::test]
async fn test_hybrid_suggest_issues_single_post() {
    let server = setup_mock_server().await;
    let tasks = vec![
        Task::new("Refactor parser", 2, 4, 6.0),
        Task::new("Answer support ticket", 5, 2, 0.5),
    ];

    Mock::given(method("POST"))
        .and(path("/suggest"))
        .and(query_param("mode", "hybrid"))
        .and(body_json(json!({ "tasks": tasks })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestion": "Answer support ticket first",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = assert_ok!(
        client_for(&server)
            .suggest(&tasks, Some(RequestMode::Hybrid))
            .await
    );
    assert_eq!(outcome.display_text(), "Answer support ticket first");
}

#[tokio::test]
async fn test_mode_is_optional() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "done"})))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = assert_ok!(client_for(&server).automate(&Task::starter_list(), None).await);
    assert_eq!(outcome, ApiOutcome::Text("done".to_string()));

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_arbitrary_payload_is_kept_raw() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/suggest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
        .mount(&server)
        .await;

    let outcome = assert_ok!(
        client_for(&server)
            .request(RequestKind::Suggest, &Task::starter_list(), Some(RequestMode::Llm))
            .await
    );
    assert_eq!(outcome.display_text(), "{\n  \"foo\": \"bar\"\n}");
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Nothing listens on the discard port of localhost in CI images.
    let client = assert_ok!(DashboardClient::with_config_and_base_url(
        ClientConfig {
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
        },
        "http://127.0.0.1:9",
    ));

    let err = client
        .suggest(&Task::starter_list(), Some(RequestMode::Hybrid))
        .await
        .expect_err("no server");
    assert!(matches!(err, DashboardError::Http(_)));
}

#[tokio::test]
async fn test_wiremock_basic_post_payload() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
        .mount(&server)
        .await;

    let value = assert_ok!(
        client_for(&server)
            .post_tasks(RequestKind::Automate, &[], Some(RequestMode::Heuristic))
            .await
    );
    assert_eq!(value.get("result").and_then(|value| value.as_str()), Some("ok"));

    let requests = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value = assert_ok!(serde_json::from_slice(&requests[0].body));
    assert_eq!(body, json!({"tasks": []}));
}
