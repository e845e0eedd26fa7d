use std::time::Duration;

use serde_json::Value;

use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::movies::into_sequence;

const CACHE_KEY: &str = "genres";

const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Handle a `get_genres` tool call.
pub async fn handle(executor: &ToolExecutor) -> Result<Value, ToolError> {
    executor
        .cached(CACHE_KEY, CACHE_TTL, || async {
            let body = executor.backend().fetch_json(&["genres"]).await?;
            into_sequence(body, "genres").map(Value::Array)
        })
        .await
}
