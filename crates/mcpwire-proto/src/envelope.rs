//! MCP request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use tracing::debug;

use mcpwire_jsonrpc::{serialize_payload, Error, RequestId, ResponseError, VERSION};

use crate::action::{McpAction, McpStatus};

/// An MCP request: the JSON-RPC envelope extended with tool-execution fields.
///
/// The `method` field always carries the action's string form so that plain
/// JSON-RPC consumers can route the message without knowing about `action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub method: String,
    pub action: McpAction,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub params: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tool: Option<String>,
    #[serde(skip_serializing_if = "RequestId::is_none", default)]
    pub id: RequestId,
}

impl McpRequest {
    /// Build an MCP request. Params follow the same serialize-at-construction
    /// rule as the base layer; action, context and id pass through unchecked.
    ///
    /// An empty tool name means the same as no tool at all. The wire form
    /// cannot tell them apart, so both collapse to an omitted field.
    pub fn new<P>(
        action: McpAction,
        params: Option<&P>,
        context: Option<Value>,
        tool: Option<&str>,
        id: RequestId,
    ) -> Result<Self, Error>
    where
        P: Serialize + ?Sized,
    {
        if tool == Some("") {
            debug!("empty tool name treated as absent");
        }

        Ok(Self {
            jsonrpc: VERSION.to_string(),
            method: action.as_str().to_string(),
            action,
            params: serialize_payload(params)?,
            context,
            tool: tool.filter(|t| !t.is_empty()).map(str::to_string),
            id,
        })
    }

    /// True when the request carries no id.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// An MCP response: status plus opaque data in place of the raw result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub status: McpStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Box<RawValue>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ResponseError>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub id: RequestId,
}

impl McpResponse {
    /// Build a response; the error field stays unset. The context is echoed
    /// from the originating request.
    pub fn new<D>(
        status: McpStatus,
        data: Option<&D>,
        context: Option<Value>,
        id: RequestId,
    ) -> Result<Self, Error>
    where
        D: Serialize + ?Sized,
    {
        Ok(Self {
            jsonrpc: VERSION.to_string(),
            status,
            data: serialize_payload(data)?,
            error: None,
            context,
            id,
        })
    }

    /// Build an error reply; the status is forced to `Error` and data stays
    /// unset, while context and id are preserved.
    pub fn from_error(error: ResponseError, context: Option<Value>, id: RequestId) -> Self {
        Self {
            jsonrpc: VERSION.to_string(),
            status: McpStatus::Error,
            data: None,
            error: Some(error),
            context,
            id,
        }
    }
}
