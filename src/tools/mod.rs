//! Tool system for the grants MCP server
//!
//! Tools are the callable surface of the server: each one describes itself
//! with a JSON Schema and executes validated arguments into a text result.
//! Arguments are validated against the declared schema before execution.

use crate::grants::GrantsClientConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

pub mod builtin;

/// Callable capability exposed over the tool-invocation protocol
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool descriptor: name, description, and JSON Schema for arguments
    fn describe(&self) -> ToolDescription;

    /// Called once at server startup with the resolved upstream
    /// configuration (base URL + credential, read-only thereafter)
    async fn initialize(&mut self, config: &GrantsClientConfig) -> Result<(), ToolError>;

    /// Execute with arguments already validated against the schema from
    /// `describe()`. Returns the tool's text output; recoverable search
    /// failures are part of that text, not an `Err`.
    async fn execute(&self, arguments: &Value) -> Result<String, ToolError>;
}

/// Tool descriptor surfaced through tool discovery
#[derive(Debug, Clone)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Registry of tools keyed by protocol name
pub struct ToolSystem {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolSystem {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register the builtin tool set and initialize each tool with the
    /// resolved upstream configuration.
    pub async fn initialize(&mut self, config: &GrantsClientConfig) -> Result<(), ToolError> {
        let mut tool: Box<dyn Tool> = Box::new(builtin::SearchGrantsTool::new());
        tool.initialize(config).await?;

        let name = tool.describe().name;
        self.tools.insert(name, tool);

        Ok(())
    }

    /// Get a tool description by protocol name
    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|tool| tool.describe())
    }

    /// Descriptions of every registered tool, for tool discovery
    pub fn describe_all(&self) -> Vec<ToolDescription> {
        self.tools.values().map(|tool| tool.describe()).collect()
    }

    /// Execute a tool after validating the arguments against its schema
    pub async fn execute_tool(
        &self,
        tool_name: &str,
        arguments: &Value,
    ) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        self.validate_arguments(tool_name, arguments)?;

        tool.execute(arguments).await
    }

    /// Validate arguments against the tool's declared schema
    fn validate_arguments(&self, tool_name: &str, arguments: &Value) -> Result<(), ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        let description = tool.describe();
        let validator = jsonschema::validator_for(&description.input_schema)
            .map_err(|e| ToolError::SchemaError(format!("Schema compilation error: {e}")))?;

        validator.validate(arguments).map_err(|errors| {
            let error_messages: Vec<String> = errors
                .map(|e| format!("At '{}': {}", e.instance_path, e))
                .collect();
            ToolError::ValidationError(error_messages.join("; "))
        })
    }

    /// Names of all registered tools
    pub fn list_tools(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Tool system errors. `UnknownTool` is the one variant surfaced as a
/// protocol-level fault; everything else is recovered into tool output.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Tool initialization failed: {0}")]
    InitializationError(String),
    #[error("Parameter validation failed: {0}")]
    ValidationError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Tool execution failed: {0}")]
    ExecutionError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_tool_system_starts_empty() {
        let tool_system = ToolSystem::new();
        assert_eq!(tool_system.list_tools().len(), 0);
    }

    #[tokio::test]
    async fn test_tool_system_registers_search_grants() {
        let mut tool_system = ToolSystem::new();
        tool_system
            .initialize(&GrantsClientConfig::default())
            .await
            .unwrap();

        assert_eq!(tool_system.list_tools(), vec!["search-grants".to_string()]);
        assert!(tool_system.describe_tool("search-grants").is_some());
        assert_eq!(tool_system.describe_all().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_unknown_tool() {
        let tool_system = ToolSystem::new();
        let result = tool_system
            .execute_tool("fetch-weather", &json!({"query": "x"}))
            .await;
        assert!(matches!(result, Err(ToolError::UnknownTool(_))));
    }

    #[tokio::test]
    async fn test_execute_rejects_arguments_violating_schema() {
        let mut tool_system = ToolSystem::new();
        tool_system
            .initialize(&GrantsClientConfig::default())
            .await
            .unwrap();

        // query is required by the declared schema
        let result = tool_system.execute_tool("search-grants", &json!({})).await;
        assert!(matches!(result, Err(ToolError::ValidationError(_))));

        let result = tool_system
            .execute_tool("search-grants", &json!({"query": 42}))
            .await;
        assert!(matches!(result, Err(ToolError::ValidationError(_))));
    }
}
