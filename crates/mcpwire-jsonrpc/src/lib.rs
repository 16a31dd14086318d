//! JSON-RPC 2.0 message envelopes for the mcpwire protocol stack.
//!
//! This crate is pure message shaping: constructors for request/response
//! envelopes, the standard error-code taxonomy, and nothing else. Transports
//! and dispatchers live elsewhere and consume these types.

pub mod envelope;
pub mod error;
pub mod id;

pub use envelope::{serialize_payload, BatchRequest, BatchResponse, Request, Response};
pub use error::{codes, error_message, Error, ResponseError};
pub use id::RequestId;

/// Protocol version tag carried by every envelope.
pub const VERSION: &str = "2.0";
