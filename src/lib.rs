//! grants-mcp - Grant opportunity search over the Model Context Protocol
//!
//! An MCP server exposing a single callable capability - keyword search of
//! government grant opportunities - backed by the Simpler Grants REST API.
//!
//! # Overview
//!
//! This crate provides:
//! - Typed JSON-RPC / MCP message structures and a stdio transport
//! - A tool system with JSON Schema argument validation
//! - The `search-grants` tool: argument normalization, upstream query
//!   construction, one HTTP call per invocation, pagination slicing, and
//!   bounded text rendering
//! - A closed classification of upstream failures, all recovered into the
//!   tool's text output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use grants_mcp::config::ServerConfig;
//! use grants_mcp::server::McpServer;
//! use grants_mcp::transport::run_stdio;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::load_default()?;
//!     let server = McpServer::new(config).await?;
//!     run_stdio(server).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod grants;
pub mod observability;
pub mod protocol;
pub mod server;
pub mod testing;
pub mod tools;
pub mod transport;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use grants::{Grant, GrantsClient, GrantsClientConfig, SearchError, SearchRequest};
pub use server::McpServer;
pub use tools::{Tool, ToolDescription, ToolError, ToolSystem};
