use std::time::Duration;

use serde_json::Value;

use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::movies::into_sequence;

const CACHE_KEY: &str = "all_movies";

/// Full catalog listing: 10 hours.
const CACHE_TTL: Duration = Duration::from_secs(10 * 60 * 60);

/// Handle a `search_all_movies` tool call.
pub async fn handle(executor: &ToolExecutor) -> Result<Value, ToolError> {
    executor
        .cached(CACHE_KEY, CACHE_TTL, || async {
            let body = executor.backend().fetch_json(&["movies"]).await?;
            into_sequence(body, "movies").map(Value::Array)
        })
        .await
}
