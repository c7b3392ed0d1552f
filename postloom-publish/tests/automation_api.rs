use postloom_common::PostloomError;
use postloom_publish::{ActionExecutor, AutomationApi};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn execute_posts_the_task_to_the_bound_action() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/actions/LINKEDIN_CREATE_LINKED_IN_POST/execute"))
        .and(header("x-api-key", "composio-key"))
        .and(body_partial_json(json!({
            "input": { "task": "Create a LinkedIn post by author urn:li:person:abc" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "successfull": true,
            "data": { "id": "urn:li:share:123" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = AutomationApi::new(&server.uri(), "composio-key".into()).expect("client");

    let raw = api
        .execute("Create a LinkedIn post by author urn:li:person:abc")
        .await
        .expect("execute");

    assert_eq!(raw["data"]["id"], "urn:li:share:123");
}

#[tokio::test]
async fn provider_error_maps_to_publish_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "connection expired" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = AutomationApi::new(&server.uri(), "composio-key".into()).expect("client");

    let err = api.execute("task").await.expect_err("should fail");

    match err {
        PostloomError::Publish(detail) => assert!(detail.contains("connection expired")),
        other => panic!("expected publish failure, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_key_fails_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let api = AutomationApi::new(&server.uri(), "".into()).expect("client");

    let err = api.execute("task").await.expect_err("should fail");
    assert!(matches!(
        err,
        PostloomError::MissingCredential("automation API key")
    ));
}
