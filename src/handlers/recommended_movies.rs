use serde_json::Value;

use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::movies::{parse_sequence, recommend};

/// Handle a `get_recommended_movies` tool call.
///
/// Never cached: the ranking is read live on every call.
pub async fn handle(executor: &ToolExecutor) -> Result<Value, ToolError> {
    let body = executor.backend().fetch_text(&["movies"]).await?;
    let movies = parse_sequence(&body, "movies")?;
    Ok(Value::Array(recommend(movies)))
}
