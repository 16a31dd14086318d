//! MCP-specific error codes layered over the base taxonomy.

use mcpwire_jsonrpc::error_message;

/// Error codes reserved for MCP failures.
pub mod codes {
    pub const ACTION_NOT_SUPPORTED: i32 = -33001;
    pub const TOOL_NOT_AVAILABLE: i32 = -33002;
    pub const CONTEXT_INVALID: i32 = -33003;
    pub const EXECUTION_FAILED: i32 = -33004;
}

/// Canonical message for an MCP error code.
///
/// The four MCP codes are checked first; everything else delegates to the
/// base JSON-RPC lookup, including its server-error range and the unknown
/// fallback.
pub fn mcp_error_message(code: i32) -> &'static str {
    match code {
        codes::ACTION_NOT_SUPPORTED => "Action not supported",
        codes::TOOL_NOT_AVAILABLE => "Tool not available",
        codes::CONTEXT_INVALID => "Context invalid",
        codes::EXECUTION_FAILED => "Execution failed",
        other => error_message(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpwire_jsonrpc::codes as base_codes;

    #[test]
    fn test_mcp_specific_messages() {
        assert_eq!(mcp_error_message(codes::ACTION_NOT_SUPPORTED), "Action not supported");
        assert_eq!(mcp_error_message(codes::TOOL_NOT_AVAILABLE), "Tool not available");
        assert_eq!(mcp_error_message(codes::CONTEXT_INVALID), "Context invalid");
        assert_eq!(mcp_error_message(codes::EXECUTION_FAILED), "Execution failed");
    }

    #[test]
    fn test_delegates_to_base_taxonomy() {
        assert_eq!(mcp_error_message(base_codes::INVALID_REQUEST), "Invalid Request");
        assert_eq!(mcp_error_message(base_codes::PARSE_ERROR), "Parse error");
        assert_eq!(mcp_error_message(-32050), "Server error");
        assert_eq!(mcp_error_message(-1), "Unknown error");
    }
}
