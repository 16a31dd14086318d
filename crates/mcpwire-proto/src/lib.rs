//! MCP message envelopes layered on the JSON-RPC 2.0 base protocol.
//!
//! MCP keeps the base envelope shape and version tag, adds tool-execution
//! fields (action, context, tool, status), and extends the error taxonomy
//! with its own codes, falling back to the base table for everything else.

pub mod action;
pub mod envelope;
pub mod error;

pub use action::{McpAction, McpStatus};
pub use envelope::{McpRequest, McpResponse};
pub use error::{codes, mcp_error_message};
