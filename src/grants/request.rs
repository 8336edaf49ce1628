//! Search request construction
//!
//! Turns caller-supplied tool arguments into the upstream search payload.
//! Every field has a default, so building never fails and performs no I/O.

use serde_json::{json, Value};

/// Fallback search term when the caller sends no usable query
pub const DEFAULT_QUERY: &str = "grants";
/// Display page when the caller omits one
pub const DEFAULT_PAGE: i64 = 1;
/// Grants shown per display page when the caller omits a size
pub const DEFAULT_GRANTS_PER_PAGE: usize = 3;
/// Upstream batch size: one fetch per invocation, display pagination is a
/// local slice of this batch. 100 is the upstream page_size cap.
pub const FETCH_PAGE_SIZE: usize = 100;

/// One invocation's search parameters: the normalized query plus the display
/// window. A fresh value is built per tool call; nothing is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    /// Display page, passed through unvalidated - out-of-range values
    /// produce an empty window, not an error
    pub page: i64,
    pub grants_per_page: usize,
}

impl SearchRequest {
    /// Build a request from raw tool arguments, applying defaults.
    ///
    /// The query is trimmed; an absent or blank query falls back to
    /// [`DEFAULT_QUERY`]. A non-positive `grants_per_page` falls back to the
    /// default because the page math needs a positive window size.
    pub fn build(query: Option<&str>, page: Option<i64>, grants_per_page: Option<i64>) -> Self {
        let query = match query.map(str::trim) {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => DEFAULT_QUERY.to_string(),
        };

        let grants_per_page = match grants_per_page {
            Some(n) if n >= 1 => n as usize,
            _ => DEFAULT_GRANTS_PER_PAGE,
        };

        Self {
            query,
            page: page.unwrap_or(DEFAULT_PAGE),
            grants_per_page,
        }
    }

    /// Upstream JSON body for `POST /opportunities/search`.
    ///
    /// The status filter and pagination block are fixed: current and
    /// forecasted opportunities, newest opportunity ids first, one batch.
    pub fn payload(&self) -> Value {
        json!({
            "filters": {
                "opportunity_status": {
                    "one_of": ["forecasted", "posted"]
                }
            },
            "pagination": {
                "order_by": "opportunity_id",
                "page_offset": 1,
                "page_size": FETCH_PAGE_SIZE,
                "sort_direction": "descending"
            },
            "query": self.query
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_applies_all_defaults() {
        let request = SearchRequest::build(None, None, None);
        assert_eq!(request.query, DEFAULT_QUERY);
        assert_eq!(request.page, 1);
        assert_eq!(request.grants_per_page, 3);
    }

    #[test]
    fn test_build_trims_query() {
        let request = SearchRequest::build(Some("  solar energy  "), None, None);
        assert_eq!(request.query, "solar energy");
    }

    #[test]
    fn test_build_blank_query_falls_back() {
        let request = SearchRequest::build(Some("   "), None, None);
        assert_eq!(request.query, DEFAULT_QUERY);

        let request = SearchRequest::build(Some(""), None, None);
        assert_eq!(request.query, DEFAULT_QUERY);
    }

    #[test]
    fn test_build_passes_page_through_unvalidated() {
        assert_eq!(SearchRequest::build(None, Some(7), None).page, 7);
        // Out-of-range pages are not an error here; they render an empty
        // window downstream
        assert_eq!(SearchRequest::build(None, Some(0), None).page, 0);
        assert_eq!(SearchRequest::build(None, Some(-4), None).page, -4);
    }

    #[test]
    fn test_build_rejects_non_positive_page_size() {
        assert_eq!(SearchRequest::build(None, None, Some(0)).grants_per_page, 3);
        assert_eq!(
            SearchRequest::build(None, None, Some(-1)).grants_per_page,
            3
        );
        assert_eq!(
            SearchRequest::build(None, None, Some(10)).grants_per_page,
            10
        );
    }

    #[test]
    fn test_payload_shape() {
        let payload = SearchRequest::build(Some("wildfire"), Some(2), Some(5)).payload();

        assert_eq!(payload["query"], "wildfire");
        assert_eq!(
            payload["filters"]["opportunity_status"]["one_of"],
            json!(["forecasted", "posted"])
        );
        assert_eq!(payload["pagination"]["order_by"], "opportunity_id");
        assert_eq!(payload["pagination"]["sort_direction"], "descending");
        assert_eq!(payload["pagination"]["page_offset"], 1);
        assert_eq!(payload["pagination"]["page_size"], FETCH_PAGE_SIZE);
    }

    #[test]
    fn test_payload_ignores_display_window() {
        // Display pagination never leaks into the upstream body
        let a = SearchRequest::build(Some("water"), Some(1), Some(3)).payload();
        let b = SearchRequest::build(Some("water"), Some(9), Some(50)).payload();
        assert_eq!(a, b);
    }
}
