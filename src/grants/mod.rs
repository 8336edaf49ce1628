//! Grant search core: upstream records, request construction, the HTTP
//! client, and text rendering
//!
//! Everything here is per-invocation: a fresh request is built for every
//! tool call, the response data is owned by that call, and nothing outlives
//! it except the read-only client configuration.

pub mod client;
pub mod model;
pub mod render;
pub mod request;

pub use client::{GrantsClient, GrantsClientConfig, SearchError, DEFAULT_BASE_URL};
pub use model::{Grant, OpportunitySummary, PaginationInfo, SearchEnvelope, SearchResults};
pub use render::{render_grant, render_no_matches, render_page};
pub use request::SearchRequest;
