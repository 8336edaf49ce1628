//! Transport layer for the MCP server
//!
//! The inbound protocol runs over newline-delimited JSON-RPC on
//! stdin/stdout. Log output never touches this channel.

pub mod stdio;

pub use stdio::run_stdio;
