//! Integration tests for the research backend gateway against a mock server.

use bizlens_core::BizlensError;
use bizlens_gateway::research::{
    OpportunityOptions, ResearchClient, ResearchConfig, ResearchOptions,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ResearchClient {
    ResearchClient::new(ResearchConfig::new().with_base_url(server.uri()))
        .expect("client construction")
}

#[tokio::test]
async fn comprehensive_research_returns_body_verbatim() {
    let server = MockServer::start().await;
    let body = json!({
        "business_type": "pharmacy",
        "location": "Pune",
        "analysis": {
            "viability_score": 7.5,
            "recommended_action": "proceed",
            "market_gaps": ["24x7 availability"],
        },
        "competitors": [{"name": "MedPlus", "rating": 4.1}],
    });

    Mock::given(method("GET"))
        .and(path("/api/comprehensive-research"))
        .and(query_param("business_type", "pharmacy"))
        .and(query_param("location", "Pune"))
        .and(query_param("include_raw_data", "false"))
        .and(query_param("use_cache", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .comprehensive_research("pharmacy", "Pune", &ResearchOptions::default())
        .await
        .expect("request should succeed");

    assert_eq!(result, body);
}

#[tokio::test]
async fn research_options_are_passed_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/comprehensive-research"))
        .and(query_param("include_raw_data", "true"))
        .and(query_param("use_cache", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ResearchOptions { include_raw_data: true, use_cache: false };
    client_for(&server)
        .comprehensive_research("gym", "Delhi", &options)
        .await
        .expect("request should succeed");
}

#[tokio::test]
async fn city_opportunities_sends_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/city-opportunities"))
        .and(query_param("city", "Jaipur"))
        .and(query_param("include_analysis", "true"))
        .and(query_param("max_opportunities", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"city": "Jaipur"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .city_opportunities("Jaipur", &OpportunityOptions::default())
        .await
        .expect("request should succeed");

    assert_eq!(result["city"], "Jaipur");
}

#[tokio::test]
async fn raw_scraped_data_hits_expected_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/raw-scraped-data"))
        .and(query_param("business_type", "bakery"))
        .and(query_param("location", "Surat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"google_maps": []})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).raw_scraped_data("bakery", "Surat").await.expect("request should succeed");
}

#[tokio::test]
async fn health_probe() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let result = client_for(&server).health().await.expect("request should succeed");
    assert_eq!(result["status"], "healthy");
}

#[tokio::test]
async fn error_status_with_detail_becomes_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/comprehensive-research"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .comprehensive_research("pharmacy", "Pune", &ResearchOptions::default())
        .await
        .expect_err("request should fail");

    match err {
        BizlensError::Remote(message) => assert_eq!(message, "not found"),
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_without_json_body_falls_back_to_status_line() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream blew up"))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.expect_err("request should fail");

    match err {
        BizlensError::Remote(message) => assert_eq!(message, "503 Service Unavailable"),
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_becomes_connectivity_error() {
    // Grab a port that is guaranteed free again once the server drops.
    let server = MockServer::start().await;
    let dead_uri = server.uri();
    drop(server);

    let client = ResearchClient::new(ResearchConfig::new().with_base_url(dead_uri.clone()))
        .expect("client construction");
    let err = client
        .comprehensive_research("pharmacy", "Pune", &ResearchOptions::default())
        .await
        .expect_err("request should fail");

    match err {
        BizlensError::Connectivity(message) => {
            assert!(message.contains("research"), "names the backend: {message}");
            assert!(message.contains(&dead_uri), "names the address: {message}");
        }
        other => panic!("expected Connectivity error, got {other:?}"),
    }
}

#[tokio::test]
async fn timeout_expiry_becomes_connectivity_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy"}))
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&server)
        .await;

    let client = ResearchClient::new(
        ResearchConfig::new()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(25)),
    )
    .expect("client construction");

    let err = client.health().await.expect_err("request should time out");
    assert!(matches!(err, BizlensError::Connectivity(_)), "got {err:?}");
}
