pub mod get_genres;
pub mod get_movie_by_id;
pub mod recommended_movies;
pub mod search_all_movies;
pub mod search_by_keyword;

use crate::catalog;
use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams, ToolResult};

/// MCP protocol revision reported by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Parse one raw request body and produce its response.
///
/// Always yields an envelope: bodies that are not a JSON-RPC request
/// produce a parse error with a `null` id.
pub async fn handle_message(raw: &[u8], executor: &ToolExecutor) -> JsonRpcResponse {
    let req: JsonRpcRequest = match serde_json::from_slice(raw) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "parse error");
            return JsonRpcResponse::error(None, JsonRpcError::parse_error(e.to_string()));
        }
    };

    // Validate jsonrpc version
    if req.jsonrpc != "2.0" {
        return JsonRpcResponse::error(req.id.clone(), JsonRpcError::invalid_request());
    }

    dispatch(&req, executor).await
}

/// Dispatch a JSON-RPC request to the appropriate handler.
pub async fn dispatch(req: &JsonRpcRequest, executor: &ToolExecutor) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            JsonRpcResponse::success(req.id.clone(), result)
        }

        "tools/list" => JsonRpcResponse::success(req.id.clone(), catalog::tool_list()),

        "tools/call" => match call_tool(req, executor).await {
            Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
            Err(err) => JsonRpcResponse::error(req.id.clone(), err.into()),
        },

        _ => JsonRpcResponse::error(req.id.clone(), JsonRpcError::method_not_found(&req.method)),
    }
}

async fn call_tool(req: &JsonRpcRequest, executor: &ToolExecutor) -> Result<serde_json::Value, ToolError> {
    let params: ToolCallParams = match &req.params {
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| ToolError::InvalidArguments(format!("Invalid tools/call params: {e}")))?,
        None => return Err(ToolError::InvalidArguments("Missing params for tools/call".into())),
    };

    let payload = executor.execute(&params.name, params.arguments).await?;
    let tool_result = ToolResult::json(&payload)?;
    serde_json::to_value(&tool_result)
        .map_err(|e| ToolError::Internal(format!("cannot encode tool result: {e}")))
}
