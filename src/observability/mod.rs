//! Observability for the grants MCP server
//!
//! Structured logging via the tracing crate. Everything writes to stderr:
//! stdout belongs to the JSON-RPC transport.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
