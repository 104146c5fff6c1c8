//! Integration tests for the API client against a mocked upstream.

use ransomlive_api::{ApiError, ClientConfig, RansomClient, RecentOrder, VictimFilters};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RansomClient {
    let config = ClientConfig::new("test-key")
        .unwrap()
        .with_base_url(Url::parse(&server.uri()).unwrap())
        .with_timeout(Duration::from_millis(500));
    RansomClient::new(config).unwrap()
}

#[tokio::test]
async fn sends_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(header("X-API-KEY", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let stats = client.stats().await.unwrap();
    assert_eq!(stats, json!({"total": 1}));
}

#[tokio::test]
async fn group_info_returns_payload_unmodified() {
    let server = MockServer::start().await;
    let payload = json!({
        "name": "lockbit3",
        "locations": [{"fqdn": "example.onion", "available": true}],
        "profile": ["LockBit 3.0"]
    });
    Mock::given(method("GET"))
        .and(path("/groups/lockbit3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert_eq!(client.group_info("lockbit3").await.unwrap(), payload);
}

#[tokio::test]
async fn victim_404_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/victim/nonexistent"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.victim_info("nonexistent").await {
        Err(ApiError::NotFound(what)) => assert!(what.contains("nonexistent")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listgroups"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"error": "maintenance window"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.list_groups().await {
        Err(ApiError::Upstream { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance window");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.stats().await {
        Err(ApiError::Json(_)) => {}
        other => panic!("expected Json, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_upstream_times_out_within_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let started = std::time::Instant::now();
    let result = client.stats().await;
    assert!(matches!(result, Err(ApiError::Timeout)));
    // 500 ms configured timeout plus scheduling slack.
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn list_victims_forwards_only_set_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/victims"))
        .and(query_param("group", "lockbit3"))
        .and(query_param("year", "2024"))
        .and(query_param_is_missing("sector"))
        .and(query_param_is_missing("country"))
        .and(query_param_is_missing("month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let filters = VictimFilters {
        group: Some("lockbit3".to_string()),
        year: Some("2024".to_string()),
        ..Default::default()
    };
    client.list_victims(&filters).await.unwrap();
}

#[tokio::test]
async fn empty_filter_set_rejected_without_request() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and the expect(0) guard
    // below would fail the test on drop.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    match client.list_victims(&VictimFilters::default()).await {
        Err(ApiError::InvalidInput(reason)) => {
            assert!(reason.contains("at least one filter"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[tokio::test]
async fn search_combines_query_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/victims/search"))
        .and(query_param("q", "hospital"))
        .and(query_param("country", "FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let filters = ransomlive_api::SearchFilters {
        country: Some("FR".to_string()),
        ..Default::default()
    };
    client.search_victims("hospital", &filters).await.unwrap();
}

#[tokio::test]
async fn recent_victims_sends_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/victims/recent"))
        .and(query_param("order", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.recent_victims(RecentOrder::Published).await.unwrap();
}

#[tokio::test]
async fn note_content_uses_both_path_segments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ransomnotes/lockbit3/readme.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "..."})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .ransom_note_content("lockbit3", "readme.txt")
        .await
        .unwrap();
}
