//! Integration tests for the portal client transport layer.
//!
//! Exercises the client against a mock backend:
//! - Response parsing for list and generate endpoints
//! - Request bodies carry exactly the filters that were set
//! - One retry on transient read failures, none on mutations
//! - Error taxonomy for non-2xx statuses and malformed bodies

use portal_client::{
    GenerateSocialRequest, GenerateTitlesRequest, ListTitlesRequest, PortalClient, PortalError,
    SaveTitleRequest, SourceType,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test Helpers
// =============================================================================

fn title_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "source_type": "jobs",
        "filter_sector": "Engineering",
        "topic": "",
        "title": title,
        "is_used": false,
        "used_count": 0,
        "created_at": "2025-08-20T10:30:00"
    })
}

// =============================================================================
// Parsing and request bodies
// =============================================================================

#[tokio::test]
async fn list_titles_sends_filters_and_parses_rows() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "source_type": "jobs",
        "filter_sector": "Engineering"
    });

    Mock::given(method("POST"))
        .and(path("/content/titles/list"))
        .and(body_json(&expected_body))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([title_json(1, "First"), title_json(2, "Second")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let titles = client
        .list_titles(ListTitlesRequest {
            source_type: Some(SourceType::Jobs),
            filter_sector: Some("Engineering".to_string()),
            ..Default::default()
        })
        .await
        .expect("list_titles failed");

    assert_eq!(titles.len(), 2);
    assert_eq!(titles[0].title, "First");
    assert_eq!(titles[1].filter_sector.as_deref(), Some("Engineering"));
}

#[tokio::test]
async fn generate_titles_parses_batch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/generate-titles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topic": "",
            "source_type": "news",
            "filters_applied": {"category": "technology"},
            "titles": ["A", "B", "C"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let response = client
        .generate_titles(GenerateTitlesRequest {
            source_type: SourceType::News,
            count: Some(3),
            category: Some("technology".to_string()),
            ..Default::default()
        })
        .await
        .expect("generate_titles failed");

    assert_eq!(response.titles.len(), 3);
    assert_eq!(response.source_type, SourceType::News);
}

#[tokio::test]
async fn generate_social_parses_persisted_post() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/social/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 17,
            "content": "Hiring is up across Engineering this week.",
            "message": "Social content generated and saved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let response = client
        .generate_social(GenerateSocialRequest {
            title: Some("Engineering hiring trends".to_string()),
            source_type: SourceType::Jobs,
            tone: Some("professional".to_string()),
            ..Default::default()
        })
        .await
        .expect("generate_social failed");

    assert_eq!(response.id, 17);
    assert!(response.content.contains("Engineering"));
}

#[tokio::test]
async fn one_save_call_per_title() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/titles/save"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "message": "saved"})),
        )
        .expect(5)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let requests: Vec<SaveTitleRequest> = (0..5)
        .map(|i| SaveTitleRequest {
            source_type: SourceType::Jobs,
            title: format!("Title {i}"),
            filter_sector: Some("Engineering".to_string()),
            ..Default::default()
        })
        .collect();

    let outcomes =
        futures::future::join_all(requests.into_iter().map(|r| client.save_title(r))).await;

    assert_eq!(outcomes.len(), 5);
    assert!(outcomes.iter().all(|o| o.is_ok()));
    // Mock expectation verifies exactly five requests were issued.
}

// =============================================================================
// Retry behavior
// =============================================================================

#[tokio::test]
async fn read_retries_once_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/indexing/stats"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/indexing/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": {},
            "total_records": 0,
            "total_indexed": 0,
            "overall_percentage": 0.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let stats = client.indexing_stats().await.expect("retry did not recover");
    assert_eq!(stats.total_records, 0);
}

#[tokio::test]
async fn read_gives_up_after_single_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content/filters"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let error = client.filter_options().await.expect_err("expected failure");
    assert!(matches!(error, PortalError::Api { status: 503, .. }));
}

#[tokio::test]
async fn mutations_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/titles/save"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let error = client
        .save_title(SaveTitleRequest {
            source_type: SourceType::Jobs,
            title: "Only once".to_string(),
            ..Default::default()
        })
        .await
        .expect_err("expected failure");

    assert!(matches!(error, PortalError::Api { status: 500, .. }));
}

// =============================================================================
// Error taxonomy
// =============================================================================

#[tokio::test]
async fn client_errors_surface_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/content/generate-titles"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("{\"detail\": \"Invalid source_type\"}"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let error = client
        .generate_titles(GenerateTitlesRequest::default())
        .await
        .expect_err("expected failure");

    match error {
        PortalError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Invalid source_type"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/indexing/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = PortalClient::new(server.uri());
    let error = client.dashboard_stats().await.expect_err("expected failure");
    assert!(matches!(error, PortalError::Parse(_)));
}
