use postloom_common::PostloomError;
use postloom_search::{Clock, SearchApi, SearchMode};
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Steppable clock so cache expiry can be tested without sleeping.
struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

fn provider_body() -> serde_json::Value {
    json!({
        "organic": [
            { "title": "Agentic AI Frameworks", "snippet": "An overview (2025)", "link": "https://example.com/a" },
            { "title": "Second hit", "snippet": "More detail", "link": "https://example.com/b" }
        ],
        "news": [
            { "title": "Framework ships v2", "snippet": "Released today", "link": "https://example.com/n", "date": "2 hours ago" }
        ]
    })
}

#[tokio::test]
async fn identical_searches_hit_the_provider_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-api-key", "serper-key"))
        .and(body_partial_json(json!({ "q": "Agentic AI Frameworks", "num": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(1)
        .mount(&server)
        .await;

    let api = SearchApi::new(&server.uri(), "serper-key".into()).expect("client");

    let first = api
        .search("Agentic AI Frameworks", SearchMode::Search, 10)
        .await
        .expect("first search");
    let second = api
        .search("Agentic AI Frameworks", SearchMode::Search, 10)
        .await
        .expect("second search");

    assert_eq!(first.organic.len(), 2);
    assert_eq!(second.organic.len(), 2);
    assert_eq!(second.news[0].date.as_deref(), Some("2 hours ago"));
}

#[tokio::test]
async fn distinct_queries_are_not_shared() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(2)
        .mount(&server)
        .await;

    let api = SearchApi::new(&server.uri(), "serper-key".into()).expect("client");

    api.search("rust async", SearchMode::Search, 10)
        .await
        .expect("first");
    api.search("rust sync", SearchMode::Search, 10)
        .await
        .expect("second");
}

#[tokio::test]
async fn expired_entries_are_refetched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(2)
        .mount(&server)
        .await;

    let clock = Arc::new(ManualClock::new());
    let api = SearchApi::with_clock(&server.uri(), "serper-key".into(), clock.clone())
        .expect("client");

    api.search("rust async", SearchMode::Search, 10)
        .await
        .expect("first");

    clock.advance(Duration::from_secs(3601));

    api.search("rust async", SearchMode::Search, 10)
        .await
        .expect("after expiry");
}

#[tokio::test]
async fn news_mode_posts_to_the_news_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(1)
        .mount(&server)
        .await;

    let api = SearchApi::new(&server.uri(), "serper-key".into()).expect("client");

    api.search("rust async", SearchMode::News, 5)
        .await
        .expect("news search");
}

#[tokio::test]
async fn provider_error_maps_to_search_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Unauthorized." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = SearchApi::new(&server.uri(), "bad-key".into()).expect("client");

    let err = api
        .search("rust async", SearchMode::Search, 10)
        .await
        .expect_err("should fail");

    match err {
        PostloomError::Search(detail) => assert!(detail.contains("Unauthorized")),
        other => panic!("expected search failure, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_search_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let api = SearchApi::new(&server.uri(), "serper-key".into()).expect("client");

    let err = api
        .search("rust async", SearchMode::Search, 10)
        .await
        .expect_err("should fail");

    assert!(matches!(err, PostloomError::Search(_)));
}

#[tokio::test]
async fn invalid_inputs_never_reach_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_body()))
        .expect(0)
        .mount(&server)
        .await;

    let api = SearchApi::new(&server.uri(), "serper-key".into()).expect("client");

    assert!(matches!(
        api.search("  ", SearchMode::Search, 10).await,
        Err(PostloomError::Search(_))
    ));
    assert!(matches!(
        api.search("rust", SearchMode::Search, 0).await,
        Err(PostloomError::Search(_))
    ));
    assert!(matches!(
        api.search("rust", SearchMode::Search, 21).await,
        Err(PostloomError::Search(_))
    ));

    let keyless = SearchApi::new(&server.uri(), "".into()).expect("client");
    assert!(matches!(
        keyless.search("rust", SearchMode::Search, 10).await,
        Err(PostloomError::MissingCredential("search API key"))
    ));
}
