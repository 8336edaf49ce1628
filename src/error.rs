//! Crate-level error types
//!
//! Aggregates the failure sources that can stop the server process. Errors
//! arising during a tool invocation never reach this type - they are
//! recovered into tool output so the caller always receives a well-formed
//! response.

use thiserror::Error;

/// Main error type for server startup and the transport loop
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Tool error: {0}")]
    Tool(#[from] crate::tools::ToolError),

    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
