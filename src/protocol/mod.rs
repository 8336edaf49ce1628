//! Protocol message types for the MCP server
//!
//! This module defines the JSON-RPC 2.0 and MCP structures exchanged over
//! the stdio transport: requests, responses, tool descriptors, and tool
//! call results.

pub mod messages;

pub use messages::*;
