use crate::protocol::ToolErrorCode;

/// Failure raised while executing a tool.
///
/// Every variant is surfaced to the caller as a JSON-RPC internal error;
/// [`ToolError::code`] gives the stable machine-readable discriminator that
/// travels in `error.data`.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Backend returned {status}")]
    BackendHttp { status: u16 },

    #[error("Invalid JSON from backend: {snippet}")]
    MalformedResponse { snippet: String },

    #[error("Backend returned empty response")]
    EmptyBackendResponse,

    #[error("Backend returned non-array for {what}: {snippet}")]
    InvalidBackendShape { what: &'static str, snippet: String },

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Internal failure: {0}")]
    Internal(String),
}

impl ToolError {
    pub fn code(&self) -> ToolErrorCode {
        match self {
            Self::BackendUnreachable(_) => ToolErrorCode::BackendUnreachable,
            Self::BackendHttp { .. } => ToolErrorCode::BackendHttpError,
            Self::MalformedResponse { .. } => ToolErrorCode::MalformedResponse,
            Self::EmptyBackendResponse => ToolErrorCode::EmptyBackendResponse,
            Self::InvalidBackendShape { .. } => ToolErrorCode::InvalidBackendShape,
            Self::NotFound(_) => ToolErrorCode::NotFound,
            Self::UnknownTool(_) => ToolErrorCode::UnknownTool,
            Self::InvalidArguments(_) => ToolErrorCode::InvalidArguments,
            Self::Internal(_) => ToolErrorCode::InternalError,
        }
    }

    pub(crate) fn malformed(body: &str) -> Self {
        Self::MalformedResponse { snippet: snippet(body) }
    }

    pub(crate) fn shape(what: &'static str, value: &serde_json::Value) -> Self {
        Self::InvalidBackendShape {
            what,
            snippet: snippet(&value.to_string()),
        }
    }
}

/// Maximum characters of a backend body quoted in a diagnostic.
const SNIPPET_CHARS: usize = 100;

fn snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}
