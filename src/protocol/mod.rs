pub mod request;
pub mod response;

pub use request::{JsonRpcRequest, KeywordParams, MovieByIdParams, RpcId, ToolCallParams};
pub use response::{
    JsonRpcError, JsonRpcResponse, ToolErrorCode, ToolFailure, ToolResult, ToolResultContent,
    INTERNAL_ERROR, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
