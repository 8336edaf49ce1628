//! End-to-end tests for the search-grants tool
//!
//! Drives the Tool interface against a mock upstream and checks the three
//! invocation outcomes: rendered page, no-matches message, and failure
//! recovered into text.

use grants_mcp::grants::GrantsClientConfig;
use grants_mcp::testing::envelope_json;
use grants_mcp::tools::builtin::SearchGrantsTool;
use grants_mcp::tools::Tool;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn initialized_tool(base_url: &str) -> SearchGrantsTool {
    let mut tool = SearchGrantsTool::new();
    tool.initialize(&GrantsClientConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
    })
    .await
    .unwrap();
    tool
}

#[tokio::test]
async fn test_search_renders_first_page_of_seven_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json(7)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let output = tool
        .execute(&json!({
            "query": "Artificial intelligence",
            "page": 1,
            "grantsPerPage": 3
        }))
        .await
        .unwrap();

    assert!(output.contains("Search Results for \"Artificial intelligence\":"));
    assert!(output.contains("Total Grants Found: 7"));
    assert!(output.contains("Showing grants 1 to 3 of 7"));
    assert!(output.contains("Page 1 of 3"));
    assert_eq!(output.matches("OPPORTUNITY DETAILS").count(), 3);
}

#[tokio::test]
async fn test_search_defaults_page_and_page_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json(5)))
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let output = tool.execute(&json!({"query": "water"})).await.unwrap();

    assert!(output.contains("Showing grants 1 to 3 of 5"));
    assert!(output.contains("Page 1 of 2"));
}

#[tokio::test]
async fn test_search_page_beyond_results_renders_empty_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json(4)))
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let output = tool
        .execute(&json!({"query": "water", "page": 9}))
        .await
        .unwrap();

    // Not an error: the overview renders with an empty listing
    assert!(output.contains("Page 9 of 2"));
    assert_eq!(output.matches("OPPORTUNITY DETAILS").count(), 0);
}

#[tokio::test]
async fn test_search_no_matches_names_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination_info": {"total_records": 0}
        })))
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let output = tool.execute(&json!({"query": "zzzznomatch"})).await.unwrap();

    assert!(output.contains("No grant opportunities found matching \"zzzznomatch\""));
    assert!(!output.contains("OPPORTUNITY DETAILS"));
}

#[tokio::test]
async fn test_search_upstream_rejection_recovered_into_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "API key is invalid"})),
        )
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let result = tool.execute(&json!({"query": "water"})).await;

    // A failed upstream call is tool output, not an Err
    let output = result.unwrap();
    assert!(output.contains("Error searching for grant opportunities"));
    assert!(output.contains("upstream API error (status 401)"));
    assert!(output.contains("API key is invalid"));
}

#[tokio::test]
async fn test_search_network_failure_recovered_into_text() {
    let tool = initialized_tool("http://127.0.0.1:1").await;
    let output = tool.execute(&json!({"query": "water"})).await.unwrap();

    assert!(output.contains("Error searching for grant opportunities"));
    assert!(output.contains("network failure"));
}

#[tokio::test]
async fn test_search_malformed_envelope_recovered_into_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let output = tool.execute(&json!({"query": "water"})).await.unwrap();

    assert!(output.contains("Error searching for grant opportunities"));
    assert!(output.contains("malformed upstream response"));
}

#[tokio::test]
async fn test_search_blank_query_uses_fallback_term() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/opportunities/search"))
        .and(wiremock::matchers::body_partial_json(
            json!({"query": "grants"}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tool = initialized_tool(&mock_server.uri()).await;
    let output = tool.execute(&json!({"query": "   "})).await.unwrap();

    assert!(output.contains("Search Results for \"grants\":"));
}
