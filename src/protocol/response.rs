use serde::{Deserialize, Serialize};

use super::request::RpcId;
use crate::error::ToolError;

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
///
/// `id` is always present on the wire; it is `null` when the request could
/// not be parsed or carried no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.error.as_ref().is_some_and(|e| e.code == PARSE_ERROR)
    }
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn parse_error(detail: impl Into<String>) -> Self {
        Self {
            code: PARSE_ERROR,
            message: "Parse error".into(),
            data: Some(serde_json::Value::String(detail.into())),
        }
    }

    pub fn invalid_request() -> Self {
        Self { code: INVALID_REQUEST, message: "Invalid Request".into(), data: None }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// MCP tool call result wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
        }
    }

    /// Encode a tool payload as pretty-printed JSON text.
    ///
    /// Callers recover the structured value by parsing `content[0].text`.
    pub fn json(payload: &serde_json::Value) -> Result<Self, ToolError> {
        let text = serde_json::to_string_pretty(payload)
            .map_err(|e| ToolError::Internal(format!("cannot encode tool result: {e}")))?;
        Ok(Self::text(text))
    }
}

// ---------------------------------------------------------------------------
// Tool failure layer (carried in `error.data` of an internal-error response)
// ---------------------------------------------------------------------------

/// Stable identifier of a tool failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorCode {
    BackendUnreachable,
    BackendHttpError,
    MalformedResponse,
    EmptyBackendResponse,
    InvalidBackendShape,
    NotFound,
    UnknownTool,
    InvalidArguments,
    InternalError,
}

/// Structured failure detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolFailure {
    pub code: ToolErrorCode,
    pub message: String,
}

impl From<&ToolError> for ToolFailure {
    fn from(err: &ToolError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Convert a tool failure into a JSON-RPC internal error.
///
/// Every tool failure shares code -32603; the [`ToolFailure`] in `data`
/// tells them apart.
impl From<ToolError> for JsonRpcError {
    fn from(err: ToolError) -> Self {
        let failure = ToolFailure::from(&err);
        let data = serde_json::to_value(&failure)
            .unwrap_or_else(|_| serde_json::Value::String(failure.message.clone()));
        Self {
            code: INTERNAL_ERROR,
            message: "Internal error".into(),
            data: Some(data),
        }
    }
}
