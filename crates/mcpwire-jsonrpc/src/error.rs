//! Error values and the standard JSON-RPC error-code taxonomy.

use serde::{Deserialize, Serialize};
use serde_json::value::{to_raw_value, RawValue};
use thiserror::Error;

/// Standard error codes as defined by the JSON-RPC 2.0 spec.
pub mod codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    /// Inclusive bounds of the reserved implementation-defined server range.
    pub const SERVER_ERROR_START: i32 = -32099;
    pub const SERVER_ERROR_END: i32 = -32000;
}

/// Failure raised while building an envelope.
#[derive(Debug, Error)]
pub enum Error {
    /// A construction invariant was violated. Carries the standard wire
    /// error value so callers can reply with it directly.
    #[error("{0}")]
    InvalidRequest(ResponseError),

    /// A params/result/data payload could not be serialized.
    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The error object carried inside a response.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ResponseError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Box<RawValue>>,
}

impl ResponseError {
    /// Build an error carrying the canonical message for `code`.
    pub fn standard(code: i32) -> Self {
        Self {
            code,
            message: error_message(code).to_string(),
            data: None,
        }
    }

    /// Build a custom error. Fails only when `data` cannot be serialized.
    pub fn new<D>(code: i32, message: &str, data: Option<&D>) -> Result<Self, Error>
    where
        D: Serialize + ?Sized,
    {
        let data = match data {
            Some(value) => Some(to_raw_value(value)?),
            None => None,
        };
        Ok(Self {
            code,
            message: message.to_string(),
            data,
        })
    }
}

impl PartialEq for ResponseError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.data.as_deref().map(RawValue::get) == other.data.as_deref().map(RawValue::get)
    }
}

/// Canonical message for a standard error code.
///
/// The five named codes win over the reserved server range; the range is
/// inclusive on both ends.
pub fn error_message(code: i32) -> &'static str {
    match code {
        codes::PARSE_ERROR => "Parse error",
        codes::INVALID_REQUEST => "Invalid Request",
        codes::METHOD_NOT_FOUND => "Method not found",
        codes::INVALID_PARAMS => "Invalid params",
        codes::INTERNAL_ERROR => "Internal error",
        c if (codes::SERVER_ERROR_START..=codes::SERVER_ERROR_END).contains(&c) => "Server error",
        _ => "Unknown error",
    }
}
