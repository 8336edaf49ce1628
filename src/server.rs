//! MCP request dispatcher
//!
//! Routes one JSON-RPC request to its handler. Tool-level failures are
//! returned as text results; the only protocol-level fault raised on behalf
//! of a tool is a call naming an unregistered tool.

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::protocol::{
    error_codes, CallToolResult, JsonRpcRequest, JsonRpcResponse, ToolDescriptor, PROTOCOL_VERSION,
};
use crate::tools::{ToolError, ToolSystem};
use serde_json::{json, Value};
use tracing::{debug, info};

/// Stateless-per-invocation MCP server: the only long-lived pieces are the
/// read-only configuration and the initialized tool registry.
pub struct McpServer {
    config: ServerConfig,
    tools: ToolSystem,
}

impl McpServer {
    /// Build the server and initialize its tool registry. Failure here is a
    /// startup failure; the process should exit non-zero.
    pub async fn new(config: ServerConfig) -> ServerResult<Self> {
        let client_config = config.client_config();
        if client_config.api_key.is_empty() {
            // Not fatal: upstream surfaces the missing credential per call
            info!(
                env = %config.api.api_key_env,
                "no upstream credential in environment; searches will rely on upstream rejection"
            );
        }

        let mut tools = ToolSystem::new();
        tools.initialize(&client_config).await?;

        Ok(Self { config, tools })
    }

    /// Route one raw JSON-RPC frame. Returns `None` for notifications,
    /// which must not produce a response.
    pub async fn handle_request(&self, raw: Value) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::INVALID_REQUEST,
                    format!("invalid request: {e}"),
                ));
            }
        };

        debug!(method = %request.method, "handling request");
        let id = request.id.clone().unwrap_or(Value::Null);
        let params = request.params.unwrap_or_else(|| json!({}));

        match request.method.as_str() {
            "initialize" => Some(self.handle_initialize(id)),
            "initialized" | "notifications/initialized" => None,
            "ping" => Some(JsonRpcResponse::success(id, json!({}))),
            "tools/list" => Some(self.handle_tools_list(id)),
            "tools/call" => Some(self.handle_tools_call(id, &params).await),
            method if method.starts_with("notifications/") => None,
            method => Some(JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("method not found: {method}"),
            )),
        }
    }

    fn handle_initialize(&self, id: Value) -> JsonRpcResponse {
        JsonRpcResponse::success(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": self.config.server.name,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        )
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let tools: Vec<ToolDescriptor> = self
            .tools
            .describe_all()
            .into_iter()
            .map(|d| ToolDescriptor {
                name: d.name,
                description: d.description,
                input_schema: d.input_schema,
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Value, params: &Value) -> JsonRpcResponse {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "missing tool name".to_string(),
            );
        };
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        match self.tools.execute_tool(name, &arguments).await {
            Ok(text) => {
                let result = CallToolResult::text(text);
                JsonRpcResponse::success(id, serde_json::to_value(result).expect("result encodes"))
            }
            // The one propagated protocol fault: a call naming an
            // unregistered capability
            Err(ToolError::UnknownTool(name)) => JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Unknown tool: {name}"),
            ),
            // Everything else stays a well-formed tool result
            Err(error) => {
                let result = CallToolResult::error_text(error.to_string());
                JsonRpcResponse::success(id, serde_json::to_value(result).expect("result encodes"))
            }
        }
    }
}
