//! Builtin tools shipped with the server
//!
//! Each tool module keeps its pure argument/rendering helpers separated
//! from the one I/O call it makes.

pub mod search_grants;

pub use search_grants::SearchGrantsTool;
