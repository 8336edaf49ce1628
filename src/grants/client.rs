//! HTTP client for the Simpler Grants opportunity search endpoint
//!
//! Issues exactly one outbound call per search and classifies every failure
//! into a closed set of outcomes, so callers pattern-match instead of
//! probing error shapes. No retries, no timeout override.

use crate::grants::model::{SearchEnvelope, SearchResults};
use crate::grants::request::SearchRequest;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Default upstream base URL
pub const DEFAULT_BASE_URL: &str = "https://api.simpler.grants.gov/v1";

/// Closed failure set for one upstream search call
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport could not complete the call (DNS, connection, request build)
    #[error("network failure: {0}")]
    Network(String),
    /// Upstream answered with a non-success status
    #[error("upstream API error (status {status}): {message}")]
    Upstream { status: u16, message: String },
    /// 2xx response whose envelope is unusable (undecodable body or missing
    /// grant sequence)
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

/// Read-only client configuration, resolved once at startup.
///
/// An empty `api_key` is allowed: the call is still attempted and upstream's
/// rejection surfaces as [`SearchError::Upstream`].
#[derive(Debug, Clone)]
pub struct GrantsClientConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for GrantsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

/// Upstream client owning one reqwest client for the process lifetime
pub struct GrantsClient {
    config: GrantsClientConfig,
    client: Client,
}

impl GrantsClient {
    pub fn new(config: GrantsClientConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Execute one search. Exactly one outbound call; the credential header
    /// is always attached, even when empty.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults, SearchError> {
        let url = format!("{}/opportunities/search", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .header("X-Api-Key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request.payload())
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                message: upstream_message(status.as_u16(), &body),
            });
        }

        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| SearchError::Malformed(e.to_string()))?;

        if let Some(facets) = &envelope.facet_counts {
            debug!(facet_groups = facet_count(facets), "upstream facet counts");
        }

        let grants = envelope
            .data
            .ok_or_else(|| SearchError::Malformed("response has no grant sequence".to_string()))?;

        let total = envelope.pagination_info.total_records;
        info!(
            total_records = total,
            returned = grants.len(),
            query = %request.query,
            "opportunity search complete"
        );

        Ok(SearchResults {
            grants,
            total_records: total,
        })
    }
}

/// Prefer the upstream-provided message; fall back to a generic status line.
fn upstream_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("upstream request failed with HTTP {status}"))
}

fn facet_count(facets: &Value) -> usize {
    facets.as_object().map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GrantsClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_client_accepts_empty_credential() {
        // Missing credentials are surfaced by upstream, not rejected locally
        let result = GrantsClient::new(GrantsClientConfig::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_upstream_message_prefers_body_message() {
        let body = r#"{"message": "API key is invalid"}"#;
        assert_eq!(upstream_message(401, body), "API key is invalid");
    }

    #[test]
    fn test_upstream_message_falls_back_to_status() {
        assert_eq!(
            upstream_message(502, "<html>Bad Gateway</html>"),
            "upstream request failed with HTTP 502"
        );
        assert_eq!(
            upstream_message(401, r#"{"message": ""}"#),
            "upstream request failed with HTTP 401"
        );
        assert_eq!(
            upstream_message(500, ""),
            "upstream request failed with HTTP 500"
        );
    }

    #[test]
    fn test_search_error_display_names_condition() {
        let network = SearchError::Network("connection refused".to_string());
        assert!(network.to_string().contains("network failure"));

        let upstream = SearchError::Upstream {
            status: 401,
            message: "API key is invalid".to_string(),
        };
        assert!(upstream.to_string().contains("status 401"));
        assert!(upstream.to_string().contains("API key is invalid"));

        let malformed = SearchError::Malformed("no grant sequence".to_string());
        assert!(malformed.to_string().contains("malformed"));
    }
}
