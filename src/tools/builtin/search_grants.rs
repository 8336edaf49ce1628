//! Grant opportunity search tool
//!
//! The single entry point of the server: normalizes arguments, builds the
//! upstream request, issues the search, and renders the outcome as text.
//! Search failures are recovered into the returned text so the caller
//! always receives a well-formed tool result.

use crate::grants::{
    render_no_matches, render_page, GrantsClient, GrantsClientConfig, SearchError, SearchRequest,
};
use crate::tools::{Tool, ToolDescription, ToolError};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

/// Protocol name of the search capability
pub const TOOL_NAME: &str = "search-grants";

/// Grant search tool backed by the Simpler Grants API
#[derive(Default)]
pub struct SearchGrantsTool {
    client: Option<GrantsClient>,
}

impl SearchGrantsTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the search request from raw arguments (pure function)
    fn parse_arguments(arguments: &Value) -> SearchRequest {
        SearchRequest::build(
            arguments.get("query").and_then(Value::as_str),
            arguments.get("page").and_then(Value::as_i64),
            arguments.get("grantsPerPage").and_then(Value::as_i64),
        )
    }

    /// Failure text returned to the caller: short, names the condition,
    /// carries the upstream-provided detail when there is one (pure function)
    fn failure_text(error: &SearchError) -> String {
        format!("Error searching for grant opportunities: {error}")
    }
}

#[async_trait]
impl Tool for SearchGrantsTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: TOOL_NAME.to_string(),
            description: "Search government grant opportunities by keyword".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Keywords to search for in grant opportunities"
                    },
                    "page": {
                        "type": "integer",
                        "description": "Result page to display (default: 1)"
                    },
                    "grantsPerPage": {
                        "type": "integer",
                        "description": "Number of grants shown per page (default: 3)"
                    }
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        }
    }

    async fn initialize(&mut self, config: &GrantsClientConfig) -> Result<(), ToolError> {
        // An absent credential is not rejected here; upstream surfaces it
        self.client = Some(
            GrantsClient::new(config.clone())
                .map_err(|e| ToolError::InitializationError(e.to_string()))?,
        );
        Ok(())
    }

    async fn execute(&self, arguments: &Value) -> Result<String, ToolError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| ToolError::ExecutionError("Tool not initialized".to_string()))?;

        let request = Self::parse_arguments(arguments);

        match client.search(&request).await {
            Ok(results) if results.grants.is_empty() => Ok(render_no_matches(&request.query)),
            Ok(results) => Ok(render_page(
                &results.grants,
                &request.query,
                request.page,
                request.grants_per_page,
                results.total_records,
            )),
            Err(error) => {
                warn!(%error, query = %request.query, "grant search failed");
                Ok(Self::failure_text(&error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_description() {
        let tool = SearchGrantsTool::new();
        let description = tool.describe();

        assert_eq!(description.name, "search-grants");
        assert!(!description.description.is_empty());
        assert_eq!(description.input_schema["required"], json!(["query"]));
        assert!(description.input_schema["properties"]["grantsPerPage"].is_object());
    }

    #[test]
    fn test_parse_arguments_full() {
        let request = SearchGrantsTool::parse_arguments(&json!({
            "query": "  climate resilience ",
            "page": 2,
            "grantsPerPage": 5
        }));

        assert_eq!(request.query, "climate resilience");
        assert_eq!(request.page, 2);
        assert_eq!(request.grants_per_page, 5);
    }

    #[test]
    fn test_parse_arguments_defaults() {
        let request = SearchGrantsTool::parse_arguments(&json!({"query": "water"}));
        assert_eq!(request.page, 1);
        assert_eq!(request.grants_per_page, 3);
    }

    #[test]
    fn test_failure_text_carries_upstream_detail() {
        let text = SearchGrantsTool::failure_text(&SearchError::Upstream {
            status: 401,
            message: "API key is invalid".to_string(),
        });

        assert!(text.contains("Error searching for grant opportunities"));
        assert!(text.contains("API key is invalid"));
    }

    #[tokio::test]
    async fn test_execute_before_initialize_fails() {
        let tool = SearchGrantsTool::new();
        let result = tool.execute(&json!({"query": "water"})).await;
        assert!(matches!(result, Err(ToolError::ExecutionError(_))));
    }
}
