use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID, a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    Str(String),
}

impl From<i64> for RpcId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<RpcId>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}

/// Arguments for the `get_movie_by_id` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieByIdParams {
    pub imdb_id: String,
}

/// Arguments for the `search_by_keyword` tool.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordParams {
    pub keyword: String,
}
